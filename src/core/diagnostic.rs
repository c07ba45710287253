//! Non-fatal diagnostics raised by the coordinator.

use super::node::NodeId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request the coordinator absorbed without changing state.
///
/// Diagnostics are reported through `tracing` and the coordinator's trace,
/// and handed back to the caller inside the request outcome. They are never
/// returned as `Err`.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    #[error("State node '{name}' is trying to enter but it is already active")]
    AlreadyActive { node: NodeId, name: String },

    #[error("State node '{name}' is trying to exit but there is no active node")]
    NoActiveNode { node: NodeId, name: String },

    #[error("Node {node} is not registered with this coordinator")]
    UnknownNode { node: NodeId },
}

impl Diagnostic {
    /// The node the absorbed request targeted.
    pub fn node(&self) -> NodeId {
        match self {
            Self::AlreadyActive { node, .. }
            | Self::NoActiveNode { node, .. }
            | Self::UnknownNode { node } => *node,
        }
    }
}
