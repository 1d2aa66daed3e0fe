//! Long-lived execution context for preparation and chunking requests.

use crate::constants::{UNKNOWN_SPLIT_ERROR, WORKER_THREAD_NAME};
use crate::error::ExecutionError;
use crate::worker::protocol::{self, SplitOutcome, SplitRequest};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use tokio::sync::{mpsc, oneshot};

struct Envelope {
    message: String,
    reply: oneshot::Sender<String>,
}

/// Owns a dedicated worker thread that answers serialized requests.
///
/// Requests are queued and handled one at a time, in submission order. Each
/// submission resolves exactly once: with the outcome, the worker's error
/// message, or `ExecutionError::Unavailable` if the worker is gone.
pub struct ExecutionHost {
    requests: Option<mpsc::UnboundedSender<Envelope>>,
    worker: Option<JoinHandle<()>>,
}

impl ExecutionHost {
    /// Starts a worker running the standard prepare-then-split handler.
    pub fn spawn() -> std::io::Result<Self> {
        Self::spawn_with(protocol::handle_message)
    }

    /// Starts a worker with a custom message handler.
    pub fn spawn_with<F>(handler: F) -> std::io::Result<Self>
    where
        F: Fn(&str) -> String + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                tracing::info!("execution context started");
                while let Some(envelope) = rx.blocking_recv() {
                    tracing::debug!(bytes = envelope.message.len(), "handling request");
                    let reply = panic::catch_unwind(AssertUnwindSafe(|| handler(&envelope.message)))
                        .unwrap_or_else(|payload| {
                            protocol::failure_message(panic_message(payload.as_ref()))
                        });
                    if envelope.reply.send(reply).is_err() {
                        tracing::debug!("caller went away before the outcome was delivered");
                    }
                }
                tracing::info!("execution context stopped");
            })?;
        Ok(Self {
            requests: Some(tx),
            worker: Some(worker),
        })
    }

    /// Queues a request without waiting for it.
    pub fn submit(
        &self,
        request: &SplitRequest,
    ) -> Result<PendingSplit, ExecutionError> {
        let message = serde_json::to_string(request)?;
        self.submit_raw(message)
    }

    fn submit_raw(
        &self,
        message: String,
    ) -> Result<PendingSplit, ExecutionError> {
        let sender = self.requests.as_ref().ok_or(ExecutionError::Unavailable)?;
        let (reply, response) = oneshot::channel();
        sender
            .send(Envelope { message, reply })
            .map_err(|_| ExecutionError::Unavailable)?;
        Ok(PendingSplit { response })
    }

    /// Submits and waits for the outcome.
    pub async fn run(
        &self,
        request: &SplitRequest,
    ) -> Result<SplitOutcome, ExecutionError> {
        self.submit(request)?.outcome().await
    }

    /// Closes the request queue and waits for queued work to drain.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.requests.take();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            tracing::warn!("execution context exited abnormally");
        }
    }
}

impl Drop for ExecutionHost {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A submitted request whose outcome has not been collected yet.
pub struct PendingSplit {
    response: oneshot::Receiver<String>,
}

impl PendingSplit {
    pub async fn outcome(self) -> Result<SplitOutcome, ExecutionError> {
        let message = self
            .response
            .await
            .map_err(|_| ExecutionError::Unavailable)?;
        protocol::decode_response(&message)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        UNKNOWN_SPLIT_ERROR
    }
}
