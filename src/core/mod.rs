//! Core types shared by the coordinator and its driver.
//!
//! - `Node` and `NodeId`: identity plus ordered enter/exit subscribers
//! - `NodePath` and `NodeSet`: dotted and typed naming
//! - `SlotState`: idle or held by exactly one node
//! - `Diagnostic`: absorbed, non-fatal request outcomes
//! - `Trace`: bounded record of what happened

mod diagnostic;
mod error;
mod node;
mod node_set;
mod path;
mod state;
mod trace;

pub use diagnostic::Diagnostic;
pub use error::NodeError;
pub use node::{Callback, Node, NodeId};
pub use node_set::NodeSet;
pub use path::NodePath;
pub use state::SlotState;
pub use trace::{Trace, TraceEntry, TraceEvent};
