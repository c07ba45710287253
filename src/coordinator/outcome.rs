//! Result of a single enter or exit request.

use crate::core::Diagnostic;

/// What the coordinator did with the request the caller made directly.
///
/// Same-call cascades (a queued node being auto-entered or auto-exited)
/// are not folded into the outcome; they are visible through subscribers
/// and the trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The node took the idle slot and its enter subscribers fired
    Entered,

    /// The node released the slot and its exit subscribers fired
    Exited,

    /// Another node holds the slot; the request joined a pending queue
    Queued,

    /// The request was absorbed without changing state
    Ignored(Diagnostic),
}

impl Outcome {
    /// True if subscribers of the requested node ran.
    pub fn is_fired(&self) -> bool {
        matches!(self, Self::Entered | Self::Exited)
    }

    pub fn is_queued(&self) -> bool {
        matches!(self, Self::Queued)
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Ignored(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}
