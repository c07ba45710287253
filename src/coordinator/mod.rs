//! The exclusive-slot coordinator.
//!
//! A [`Coordinator`] owns a set of nodes, the slot they compete for, and two
//! FIFO queues of deferred requests. The external transition engine may
//! signal a node's entry before the previous node's exit (or the reverse);
//! the coordinator defers whichever request conflicts and replays it when
//! the slot frees up, so at most one node is ever active.
//!
//! Resolution is deliberately asymmetric:
//!
//! - entering a node checks only the *front* of the pending-exit queue, and
//!   exits the node immediately if it is waiting there;
//! - exiting the active node *unconditionally* enters the front of the
//!   pending-enter queue, without checking whether that node is still a
//!   meaningful candidate.

mod machine;
mod outcome;
mod snapshot;

pub use machine::Coordinator;
pub use outcome::Outcome;
pub use snapshot::CoordinatorSnapshot;
