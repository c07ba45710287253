//! Driver error types.

use crate::core::NodeError;
use thiserror::Error;

/// Errors raised while routing engine signals to coordinators
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriverError {
    /// No coordinator is bound to the engine handle that sent the signal
    #[error("No coordinator bound to engine handle {handle}")]
    UnknownHandle { handle: String },

    /// A coordinator is already bound to this engine handle
    #[error("Engine handle {handle} is already bound")]
    AlreadyBound { handle: String },

    /// The signal named a node the bound coordinator does not know
    #[error(transparent)]
    Node(#[from] NodeError),
}
