//! Serializable view of a coordinator.

use serde::{Deserialize, Serialize};

/// Point-in-time view of the slot and both queues, by node name.
///
/// Snapshots are for inspection and logging; they cannot be loaded back
/// into a coordinator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorSnapshot {
    pub active: Option<String>,
    pub pending_enter: Vec<String>,
    pub pending_exit: Vec<String>,
}

impl CoordinatorSnapshot {
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// True when nothing is waiting in either queue.
    pub fn is_settled(&self) -> bool {
        self.pending_enter.is_empty() && self.pending_exit.is_empty()
    }
}
