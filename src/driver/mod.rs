//! Routing of raw engine signals to coordinators.
//!
//! A transition engine reports "enter" and "exit" per state together with a
//! handle identifying which engine instance fired. The [`Driver`] owns an
//! explicit mapping from those handles to the coordinators bound to them
//! and forwards each signal to the matching coordinator. Signals carrying a
//! handle nobody is bound to are rejected, never routed elsewhere.

mod error;

pub use error::DriverError;

use crate::coordinator::{Coordinator, Outcome};
use crate::core::{NodeId, NodeSet};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Owns the coordinators of one or more transition-engine instances.
///
/// # Example
///
/// ```rust
/// use exclusive_state::{CoordinatorBuilder, Driver, Outcome};
///
/// let coordinator = CoordinatorBuilder::new().nodes(["Idle", "Run"]).build().unwrap();
///
/// let mut driver = Driver::new();
/// driver.bind(7u32, coordinator).unwrap();
///
/// assert_eq!(driver.notify_enter_named(&7, "Idle").unwrap(), Outcome::Entered);
/// assert_eq!(driver.notify_enter_named(&7, "Run").unwrap(), Outcome::Queued);
/// assert_eq!(driver.notify_exit_named(&7, "Idle").unwrap(), Outcome::Exited);
///
/// let active = driver.coordinator(&7).unwrap().snapshot().active;
/// assert_eq!(active.as_deref(), Some("Run"));
/// ```
pub struct Driver<H> {
    bindings: HashMap<H, Coordinator>,
}

impl<H: Eq + Hash + Debug> Driver<H> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `coordinator` to an engine handle.
    pub fn bind(&mut self, handle: H, coordinator: Coordinator) -> Result<(), DriverError> {
        if self.bindings.contains_key(&handle) {
            return Err(DriverError::AlreadyBound {
                handle: format!("{handle:?}"),
            });
        }
        debug!(handle = ?handle, coordinator = %coordinator.id(), "binding coordinator");
        self.bindings.insert(handle, coordinator);
        Ok(())
    }

    /// Remove and return the coordinator bound to `handle`.
    pub fn unbind(&mut self, handle: &H) -> Option<Coordinator> {
        let removed = self.bindings.remove(handle);
        if removed.is_some() {
            debug!(handle = ?handle, "unbound coordinator");
        }
        removed
    }

    pub fn is_bound(&self, handle: &H) -> bool {
        self.bindings.contains_key(handle)
    }

    pub fn handles(&self) -> impl Iterator<Item = &H> {
        self.bindings.keys()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn coordinator(&self, handle: &H) -> Option<&Coordinator> {
        self.bindings.get(handle)
    }

    pub fn coordinator_mut(&mut self, handle: &H) -> Option<&mut Coordinator> {
        self.bindings.get_mut(handle)
    }

    /// Return the coordinator bound to `handle` to idle with empty queues,
    /// as when its engine is re-initialized.
    pub fn reset(&mut self, handle: &H) -> Result<(), DriverError> {
        self.bound_mut(handle)?.reset();
        Ok(())
    }

    /// Forward an engine "enter" signal.
    pub fn notify_enter(&mut self, handle: &H, node: NodeId) -> Result<Outcome, DriverError> {
        trace!(handle = ?handle, node = %node, "enter signal");
        Ok(self.bound_mut(handle)?.request_enter(node))
    }

    /// Forward an engine "exit" signal.
    pub fn notify_exit(&mut self, handle: &H, node: NodeId) -> Result<Outcome, DriverError> {
        trace!(handle = ?handle, node = %node, "exit signal");
        Ok(self.bound_mut(handle)?.request_exit(node))
    }

    /// Forward an "enter" signal addressed by node name.
    pub fn notify_enter_named(&mut self, handle: &H, name: &str) -> Result<Outcome, DriverError> {
        let coordinator = self.bound_mut(handle)?;
        let node = coordinator.require_node(name)?;
        Ok(coordinator.request_enter(node))
    }

    /// Forward an "exit" signal addressed by node name.
    pub fn notify_exit_named(&mut self, handle: &H, name: &str) -> Result<Outcome, DriverError> {
        let coordinator = self.bound_mut(handle)?;
        let node = coordinator.require_node(name)?;
        Ok(coordinator.request_exit(node))
    }

    /// Forward an "enter" signal addressed by a typed node.
    pub fn notify_enter_set<N: NodeSet>(
        &mut self,
        handle: &H,
        node: N,
    ) -> Result<Outcome, DriverError> {
        self.notify_enter_named(handle, node.name())
    }

    /// Forward an "exit" signal addressed by a typed node.
    pub fn notify_exit_set<N: NodeSet>(
        &mut self,
        handle: &H,
        node: N,
    ) -> Result<Outcome, DriverError> {
        self.notify_exit_named(handle, node.name())
    }

    fn bound_mut(&mut self, handle: &H) -> Result<&mut Coordinator, DriverError> {
        self.bindings
            .get_mut(handle)
            .ok_or_else(|| DriverError::UnknownHandle {
                handle: format!("{handle:?}"),
            })
    }
}

impl<H: Eq + Hash + Debug> Default for Driver<H> {
    fn default() -> Self {
        Self::new()
    }
}
