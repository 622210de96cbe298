//! Background recording of session activity timestamps.
//!
//! Activity updates are advisory telemetry: they must never block or
//! fail a token operation. Updates flow through a bounded channel to a
//! single worker task and are dropped when the queue is full.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use authhub_store::repositories::session::SessionRepository;

/// Handle for enqueueing `last_activity` touches.
#[derive(Debug, Clone)]
pub struct ActivityRecorder {
    tx: mpsc::Sender<String>,
}

impl ActivityRecorder {
    /// Spawns the worker task and returns a recorder handle.
    ///
    /// Must be called from within a tokio runtime; the worker is
    /// spawned onto the current one and `tokio::spawn` panics outside
    /// a runtime context.
    pub fn new(repo: Arc<SessionRepository>, queue_depth: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<String>(queue_depth.max(1));
        tokio::spawn(async move {
            while let Some(session_id) = rx.recv().await {
                if let Err(err) = repo.update_last_activity(&session_id, Utc::now()).await {
                    warn!(session_id, error = %err, "Failed to record session activity");
                }
            }
        });
        Self { tx }
    }

    /// Enqueues an activity touch for a session. Drops the update when
    /// the queue is full.
    pub fn record(&self, session_id: &str) {
        if self.tx.try_send(session_id.to_string()).is_err() {
            debug!(session_id, "Activity queue full, dropping update");
        }
    }
}
