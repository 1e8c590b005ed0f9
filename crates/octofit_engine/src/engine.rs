use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use octofit_core::{Msg, Record, Resource};
use octofit_logging::octo_debug;
use tokio::sync::mpsc as async_mpsc;

use crate::loader::{load_records, outcome_msg};
use crate::{Fetcher, LoadError, LoadObserver};

/// Caller-chosen identifier routing a completion back to its view.
pub type ViewId = usize;

enum LoaderCommand {
    Fetch {
        view_id: ViewId,
        resource: Resource,
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadCompleted {
    pub view_id: ViewId,
    pub resource: Resource,
    pub result: Result<Vec<Record>, LoadError>,
}

impl LoadCompleted {
    pub fn into_msg(self) -> Msg {
        outcome_msg(self.result)
    }
}

/// Runs fetches on a single-threaded runtime in a background thread.
///
/// State stays with the caller; only completions cross back over the channel.
pub struct LoaderHandle {
    cmd_tx: async_mpsc::UnboundedSender<LoaderCommand>,
    event_rx: mpsc::Receiver<LoadCompleted>,
}

impl LoaderHandle {
    pub fn new(fetcher: Arc<dyn Fetcher>, observer: Arc<dyn LoadObserver>) -> io::Result<Self> {
        let (cmd_tx, mut cmd_rx) = async_mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("octofit-loader".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    while let Some(command) = cmd_rx.recv().await {
                        let fetcher = fetcher.clone();
                        let observer = observer.clone();
                        let event_tx = event_tx.clone();
                        tokio::spawn(async move {
                            handle_command(fetcher.as_ref(), observer.as_ref(), command, event_tx)
                                .await;
                        });
                    }
                    octo_debug!("loader command channel closed");
                });
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, view_id: ViewId, resource: Resource, url: impl Into<String>) {
        let _ = self.cmd_tx.send(LoaderCommand::Fetch {
            view_id,
            resource,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<LoadCompleted> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoadCompleted> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    observer: &dyn LoadObserver,
    command: LoaderCommand,
    event_tx: mpsc::Sender<LoadCompleted>,
) {
    match command {
        LoaderCommand::Fetch {
            view_id,
            resource,
            url,
        } => {
            let result = load_records(fetcher, resource, &url, observer).await;
            // The receiver is gone once the app shuts down; nothing to deliver.
            let _ = event_tx.send(LoadCompleted {
                view_id,
                resource,
                result,
            });
        }
    }
}
