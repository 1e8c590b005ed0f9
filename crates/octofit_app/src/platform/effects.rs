use std::sync::Arc;
use std::time::Duration;

use octofit_core::Effect;
use octofit_engine::{
    FetchSettings, LoadCompleted, LoaderHandle, LoggingObserver, ReqwestFetcher, ViewId,
};
use octofit_logging::octo_info;

/// Executes effects emitted by `update` and hands completions back to the app.
pub struct EffectRunner {
    loader: LoaderHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> anyhow::Result<Self> {
        let fetcher = Arc::new(ReqwestFetcher::new(settings)?);
        let loader = LoaderHandle::new(fetcher, Arc::new(LoggingObserver))?;
        Ok(Self { loader })
    }

    pub fn enqueue(&self, view_id: ViewId, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCollection { resource, url } => {
                    octo_info!("FetchCollection view_id={} resource={} url={}", view_id, resource, url);
                    self.loader.submit(view_id, resource, url);
                }
            }
        }
    }

    pub fn next_completion(&self, wait: Duration) -> Option<LoadCompleted> {
        self.loader.recv_timeout(wait)
    }
}
