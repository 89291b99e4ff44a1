use std::sync::{mpsc, Arc};
use std::thread;

use feed_logging::feed_debug;

use crate::fetch::{FetchSettings, ReqwestFetcher, SearchBackend};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Search { request: RequestId, url: String },
}

/// Handle to the engine thread: search commands go in, completion events
/// come out. The thread owns a tokio runtime and spawns one task per
/// search, so a slow request never blocks a newer one.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// A cloneable command sender for issuing searches from another thread.
    pub fn searcher(&self) -> SearchSender {
        SearchSender {
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    /// Non-blocking poll for the next engine event.
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

/// Cloneable command side of an [`EngineHandle`].
#[derive(Clone)]
pub struct SearchSender {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl SearchSender {
    /// Issue a search. Earlier in-flight searches are not cancelled; their
    /// completions still arrive, tagged with the generation they were
    /// issued under.
    pub fn search(&self, request: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request,
            url: url.into(),
        });
    }
}

async fn handle_command(
    fetcher: &dyn SearchBackend,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request, url } => {
            feed_debug!("search request {} -> {}", request, url);
            let result = fetcher.search(&url).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request, result });
        }
    }
}
