//! Node lookup errors.

use super::node::NodeId;
use thiserror::Error;

/// Errors raised when addressing a node through a coordinator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NodeError {
    #[error("Node {node} is not registered with this coordinator")]
    Unknown { node: NodeId },

    #[error("No node named '{name}'")]
    UnknownName { name: String },
}
