use octofit_logging::{octo_info, octo_warn};

use crate::LoadEvent;

/// Observability hook invoked before the fetch, after normalization and on errors.
///
/// Implementations must not influence the load result.
pub trait LoadObserver: Send + Sync {
    fn emit(&self, event: LoadEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl LoadObserver for NoopObserver {
    fn emit(&self, _event: LoadEvent) {}
}

/// Writes load events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl LoadObserver for LoggingObserver {
    fn emit(&self, event: LoadEvent) {
        match event {
            LoadEvent::Requesting { resource, url } => {
                octo_info!("Fetching {} from: {}", resource, url);
            }
            LoadEvent::Normalized { resource, count } => {
                octo_info!("{} data received: {} records", resource, count);
            }
            LoadEvent::Failed { resource, message } => {
                octo_warn!("Error fetching {}: {}", resource, message);
            }
        }
    }
}
