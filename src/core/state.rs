//! State of the exclusive slot.

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// Occupancy of a coordinator's single exclusive slot.
///
/// There is no way to represent two active nodes: the slot is either idle
/// or held by exactly one node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum SlotState {
    #[default]
    Idle,
    Active(NodeId),
}

impl SlotState {
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Active(_) => "Active",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The node holding the slot, if any.
    pub fn active(&self) -> Option<NodeId> {
        match self {
            Self::Idle => None,
            Self::Active(node) => Some(*node),
        }
    }

    /// Check whether `node` currently holds the slot.
    pub fn is_held_by(&self, node: NodeId) -> bool {
        self.active() == Some(node)
    }
}
