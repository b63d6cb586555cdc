//! Stop signal shared between the signal listener and the HTTP server.
//!
//! `main` owns the `Shutdown`, hands one receiver to `HttpServer::run`
//! and moves the `Shutdown` into the task waiting on OS signals. Tests
//! keep it and call `trigger` themselves.

use tokio::sync::broadcast;

/// One-shot stop broadcast.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // A single () is all that is ever sent
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to pass to `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Tell every server to stop accepting and drain.
    ///
    /// Returns how many receivers were notified; 0 when the server has
    /// already exited.
    pub fn trigger(&self) -> usize {
        let notified = self.tx.send(()).unwrap_or(0);
        tracing::debug!(notified, "Shutdown triggered");
        notified
    }

    /// Receivers still alive, i.e. servers that have not returned yet.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
