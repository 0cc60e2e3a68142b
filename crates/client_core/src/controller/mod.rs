//! Interaction controller: owns the upload/ask state and runs requests.
//!
//! The controller lives on one thread (the GUI thread or the CLI task) and is
//! the only mutator of [`InteractionState`]. Requests run as tasks on a tokio
//! runtime and report back through a channel; the controller applies their
//! outcomes in completion order from [`InteractionController::process_settled`]
//! or [`InteractionController::next_settled`].

pub mod state;
pub mod view;

use std::{any::Any, future::Future, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::{runtime::Handle, sync::mpsc};
use tracing::{debug, info};

use crate::{
    api::{Answer, DocumentApi, HealthStatus, UploadReceipt},
    error::ApiClientError,
    selection::SelectedFile,
};

pub use state::{
    AnswerStatus, ConnectionStatus, Flow, InteractionState, Rejection, Submission, UploadStatus,
};
pub use view::{StatusTone, ViewModel};

enum Settled {
    Upload(Result<UploadReceipt, ApiClientError>),
    Ask(Result<Answer, ApiClientError>),
    Health(Result<HealthStatus, ApiClientError>),
}

impl Settled {
    fn interrupted(flow: Flow, reason: String) -> Self {
        let err = ApiClientError::Interrupted(reason);
        match flow {
            Flow::Upload => Self::Upload(Err(err)),
            Flow::Ask => Self::Ask(Err(err)),
            Flow::Health => Self::Health(Err(err)),
        }
    }

    fn flow(&self) -> Flow {
        match self {
            Self::Upload(_) => Flow::Upload,
            Self::Ask(_) => Flow::Ask,
            Self::Health(_) => Flow::Health,
        }
    }
}

/// Reports an interruption if the request task is dropped before it settles,
/// e.g. when the runtime shuts down underneath it.
struct SettleOnDrop {
    tx: Option<mpsc::UnboundedSender<Settled>>,
    flow: Flow,
}

impl SettleOnDrop {
    fn settle(mut self, settled: Settled) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(settled);
        }
    }
}

impl Drop for SettleOnDrop {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Settled::interrupted(
                self.flow,
                "request task dropped before completing".to_string(),
            ));
        }
    }
}

pub struct InteractionController {
    api: Arc<dyn DocumentApi>,
    runtime: Handle,
    state: InteractionState,
    settled_tx: mpsc::UnboundedSender<Settled>,
    settled_rx: mpsc::UnboundedReceiver<Settled>,
}

impl InteractionController {
    pub fn new(api: Arc<dyn DocumentApi>, runtime: Handle) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            api,
            runtime,
            state: InteractionState::default(),
            settled_tx,
            settled_rx,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::from_state(&self.state)
    }

    pub fn select_files(&mut self, files: Vec<SelectedFile>) {
        debug!(file_count = files.len(), "selection replaced");
        self.state.select_files(files);
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.state.set_question(text.into());
    }

    pub fn submit_upload(&mut self) -> Submission {
        let files = match self.state.begin_upload() {
            Ok(files) => files,
            Err(rejection) => return rejected(rejection),
        };

        info!(file_count = files.len(), "submitting upload");
        let api = Arc::clone(&self.api);
        self.spawn_request(Flow::Upload, async move {
            Settled::Upload(api.upload(files).await)
        });
        Submission::Started
    }

    pub fn submit_ask(&mut self) -> Submission {
        let question = match self.state.begin_ask() {
            Ok(question) => question,
            Err(rejection) => return rejected(rejection),
        };

        info!(question_len = question.len(), "submitting question");
        let api = Arc::clone(&self.api);
        self.spawn_request(Flow::Ask, async move {
            Settled::Ask(api.ask(question).await)
        });
        Submission::Started
    }

    pub fn check_health(&mut self) -> Submission {
        if let Err(rejection) = self.state.begin_health_check() {
            return rejected(rejection);
        }

        let api = Arc::clone(&self.api);
        self.spawn_request(Flow::Health, async move {
            Settled::Health(api.health().await)
        });
        Submission::Started
    }

    /// Applies every outcome that has arrived so far without waiting. Returns
    /// how many were applied.
    pub fn process_settled(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(settled) = self.settled_rx.try_recv() {
            self.apply(settled);
            applied += 1;
        }
        applied
    }

    /// Waits for the next outstanding request to settle and applies it.
    /// Returns `None` straight away when nothing is in flight.
    pub async fn next_settled(&mut self) -> Option<Flow> {
        if !self.state.has_request_in_flight() {
            return None;
        }
        let settled = self.settled_rx.recv().await?;
        let flow = settled.flow();
        self.apply(settled);
        Some(flow)
    }

    pub async fn settle_all(&mut self) {
        while self.next_settled().await.is_some() {}
    }

    fn apply(&mut self, settled: Settled) {
        debug!(flow = ?settled.flow(), "request settled");
        match settled {
            Settled::Upload(outcome) => self.state.finish_upload(outcome),
            Settled::Ask(outcome) => self.state.finish_ask(outcome),
            Settled::Health(outcome) => self.state.finish_health_check(outcome),
        }
    }

    fn spawn_request<F>(&self, flow: Flow, request: F)
    where
        F: Future<Output = Settled> + Send + 'static,
    {
        let guard = SettleOnDrop {
            tx: Some(self.settled_tx.clone()),
            flow,
        };
        self.runtime.spawn(async move {
            let settled = match AssertUnwindSafe(request).catch_unwind().await {
                Ok(settled) => settled,
                Err(panic) => Settled::interrupted(
                    flow,
                    format!("request task panicked: {}", panic_message(panic.as_ref())),
                ),
            };
            guard.settle(settled);
        });
    }
}

fn rejected(rejection: Rejection) -> Submission {
    debug!(?rejection, "submission rejected");
    Submission::Rejected(rejection)
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
