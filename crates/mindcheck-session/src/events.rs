use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};
use uuid::Uuid;

/// Notifications a session emits outside of its state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// An ASQ item was answered "yes"; crisis help must be shown now.
    CrisisHelp { session_id: Uuid, item: usize },
}

/// Receiver of [`SessionEvent`]s. Emission must not block.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: SessionEvent);
}

/// Logs events via `tracing` and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: SessionEvent) {
        match event {
            SessionEvent::CrisisHelp { session_id, item } => {
                warn!(session = %session_id, asq.item = item, "crisis help requested");
            }
        }
    }
}

impl EventSink for UnboundedSender<SessionEvent> {
    fn emit(&self, event: SessionEvent) {
        if self.send(event).is_err() {
            debug!("session event dropped: receiver closed");
        }
    }
}
