//! OctoFit engine: collection fetching, response normalization and load orchestration.
mod engine;
mod fetch;
mod loader;
mod normalize;
mod observe;
mod types;

pub use engine::{LoadCompleted, LoaderHandle, ViewId};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::{load_records, outcome_msg, CollectionLoader, LoadError};
pub use normalize::{normalize, DecodeError};
pub use observe::{LoadObserver, LoggingObserver, NoopObserver};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, LoadEvent};
