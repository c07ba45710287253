//! Setup and binding glue.
//!
//! A [`CoordinatorBuilder`] declares the nodes of one logical state machine
//! (by name, dotted path, or typed [`node_set!`](crate::node_set)) and
//! produces an idle [`Coordinator`](crate::Coordinator). Subscribers are
//! attached to the built coordinator.

pub mod coordinator;
pub mod error;
pub mod macros;

pub use coordinator::CoordinatorBuilder;
pub use error::{BuildError, NodeDefinitionError};
