use std::sync::Arc;

use octofit_core::{update, CollectionState, Effect, Environment, Msg, Record, Resource};

use crate::{normalize, DecodeError, FetchError, Fetcher, LoadEvent, LoadObserver, LoggingObserver};

/// Any failure between sending the request and holding a record list.
///
/// `Display` is the exact text surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Fetch `url` and normalize the body, reporting to `observer` along the way.
pub async fn load_records(
    fetcher: &dyn Fetcher,
    resource: Resource,
    url: &str,
    observer: &dyn LoadObserver,
) -> Result<Vec<Record>, LoadError> {
    observer.emit(LoadEvent::Requesting {
        resource,
        url: url.to_string(),
    });

    let result = fetch_and_normalize(fetcher, url).await;
    match &result {
        Ok(records) => observer.emit(LoadEvent::Normalized {
            resource,
            count: records.len(),
        }),
        Err(err) => observer.emit(LoadEvent::Failed {
            resource,
            message: err.to_string(),
        }),
    }
    result
}

async fn fetch_and_normalize(fetcher: &dyn Fetcher, url: &str) -> Result<Vec<Record>, LoadError> {
    let output = fetcher.fetch(url).await?;
    Ok(normalize(&output.body)?)
}

/// Convert a load result into the message that settles the view state.
pub fn outcome_msg(result: Result<Vec<Record>, LoadError>) -> Msg {
    match result {
        Ok(records) => Msg::LoadSucceeded(records),
        Err(err) => Msg::LoadFailed(err.to_string()),
    }
}

/// Runs the whole mount, fetch, normalize and settle cycle for one view.
#[derive(Clone)]
pub struct CollectionLoader {
    fetcher: Arc<dyn Fetcher>,
    observer: Arc<dyn LoadObserver>,
}

impl CollectionLoader {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            observer: Arc::new(LoggingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Mount a fresh view for `resource` and drive it until it settles.
    pub async fn load(&self, resource: Resource, env: &Environment) -> CollectionState {
        self.run(CollectionState::new(resource, env)).await
    }

    /// Activate `state` and execute the fetch it requests, if any.
    pub async fn run(&self, state: CollectionState) -> CollectionState {
        let (mut state, effects) = update(state, Msg::Activated);
        for effect in effects {
            match effect {
                Effect::FetchCollection { resource, url } => {
                    let result =
                        load_records(self.fetcher.as_ref(), resource, &url, self.observer.as_ref())
                            .await;
                    let (next, _) = update(state, outcome_msg(result));
                    state = next;
                }
            }
        }
        state
    }
}
