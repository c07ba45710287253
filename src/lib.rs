//! Exclusive State: mutually exclusive enter/exit coordination
//!
//! An external transition engine (an animation blend tree, a timer wheel,
//! an input graph) reports when each of its states is entered and exited,
//! but does not promise to report them in a mutually exclusive order: the
//! next state's entry may arrive a step before the previous state's exit.
//! This crate sits between that engine and the code subscribed to the
//! states, and guarantees that subscribers observe at most one active state
//! at a time.
//!
//! # Core Concepts
//!
//! - **Node**: one engine state, with ordered enter and exit subscribers
//! - **Coordinator**: owns the exclusive slot plus FIFO pending-enter and
//!   pending-exit queues, and replays deferred requests when the slot frees
//! - **Driver**: maps engine handles to the coordinators bound to them
//!
//! Misordered or redundant requests never fail. They are absorbed as
//! [`Diagnostic`](crate::core::Diagnostic)s, logged through `tracing`, and recorded
//! in the coordinator's [`Trace`](crate::core::Trace).
//!
//! # Example
//!
//! ```rust
//! use exclusive_state::{CoordinatorBuilder, Outcome};
//! use std::sync::{Arc, Mutex};
//!
//! let mut coordinator = CoordinatorBuilder::new()
//!     .nodes(["Idle", "Run"])
//!     .build()
//!     .unwrap();
//! let idle = coordinator.node_id("Idle").unwrap();
//! let run = coordinator.node_id("Run").unwrap();
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let run_log = Arc::clone(&log);
//! coordinator
//!     .on_enter(run, move || run_log.lock().unwrap().push("run"))
//!     .unwrap();
//!
//! coordinator.request_enter(idle);
//! // Engine signals Run's entry before Idle's exit.
//! assert_eq!(coordinator.request_enter(run), Outcome::Queued);
//! assert!(log.lock().unwrap().is_empty());
//!
//! coordinator.request_exit(idle);
//! assert_eq!(*log.lock().unwrap(), vec!["run"]);
//! assert_eq!(coordinator.active(), Some(run));
//! ```

pub mod builder;
pub mod config;
pub mod coordinator;
pub mod core;
pub mod driver;

// Re-export commonly used types
pub use builder::{BuildError, CoordinatorBuilder};
pub use config::CoordinatorConfig;
pub use coordinator::{Coordinator, CoordinatorSnapshot, Outcome};
pub use crate::core::{Diagnostic, Node, NodeId, NodePath, NodeSet, SlotState};
pub use driver::{Driver, DriverError};
