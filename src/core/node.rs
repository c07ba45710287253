//! Node identity and the enter/exit subscriber registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Boxed subscriber invoked when a node is entered or exited.
pub type Callback = Box<dyn FnMut() + Send>;

/// Opaque, stable identity of a node.
///
/// A `NodeId` is only meaningful to the coordinator that issued it. Ids
/// compare by identity (owner plus slot), never by node name, so two nodes
/// called `"Idle"` in two different coordinators are distinct.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId {
    owner: Uuid,
    index: u32,
}

impl NodeId {
    pub(crate) fn new(owner: Uuid, index: u32) -> Self {
        Self { owner, index }
    }

    /// Identity of the coordinator that owns this node.
    pub fn owner(&self) -> Uuid {
        self.owner
    }

    /// Registration order of the node within its coordinator.
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.index)
    }
}

/// One state of the external transition engine.
///
/// A node carries two ordered subscriber lists. Subscribers run
/// synchronously, in registration order, each time the coordinator lets the
/// node through the exclusive slot. A panicking subscriber is not caught:
/// it unwinds out of the coordinator call into the caller.
pub struct Node {
    id: NodeId,
    name: String,
    on_enter: Vec<Callback>,
    on_exit: Vec<Callback>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            on_enter: Vec::new(),
            on_exit: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display name used in diagnostics and snapshots.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a subscriber to the enter list.
    pub fn register_on_enter<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_enter.push(Box::new(callback));
        self
    }

    /// Append a subscriber to the exit list.
    pub fn register_on_exit<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_exit.push(Box::new(callback));
        self
    }

    pub fn enter_subscribers(&self) -> usize {
        self.on_enter.len()
    }

    pub fn exit_subscribers(&self) -> usize {
        self.on_exit.len()
    }

    pub(crate) fn fire_enter(&mut self) {
        for callback in &mut self.on_enter {
            callback();
        }
    }

    pub(crate) fn fire_exit(&mut self) {
        for callback in &mut self.on_exit {
            callback();
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("on_enter", &self.on_enter.len())
            .field("on_exit", &self.on_exit.len())
            .finish()
    }
}
