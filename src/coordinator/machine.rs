//! Coordinator that serializes enter/exit requests through one slot.

use crate::config::CoordinatorConfig;
use crate::coordinator::outcome::Outcome;
use crate::coordinator::snapshot::CoordinatorSnapshot;
use crate::core::{
    Diagnostic, Node, NodeError, NodeId, NodeSet, SlotState, Trace, TraceEvent,
};
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, warn};
use uuid::Uuid;

/// Enforces "at most one node is active" over a fixed set of nodes.
///
/// The slot and queues change only through
/// [`request_enter`](Self::request_enter),
/// [`request_exit`](Self::request_exit) and [`reset`](Self::reset).
/// Requests run to completion before returning and may resolve queued
/// requests in the same call. Cascades are resolved iteratively, so queue
/// length never translates into stack depth.
///
/// The coordinator performs no locking. Callers that share one across
/// threads must serialize access themselves.
pub struct Coordinator {
    id: Uuid,
    nodes: Vec<Node>,
    names: BTreeMap<String, NodeId>,
    state: SlotState,
    pending_enter: VecDeque<NodeId>,
    pending_exit: VecDeque<NodeId>,
    trace: Trace,
}

const UNKNOWN: &str = "<unknown>";

/// A request waiting to be resolved, either direct or cascaded.
#[derive(Clone, Copy, Debug)]
enum Request {
    Enter(NodeId),
    Exit(NodeId),
}

fn name_in(nodes: &[Node], node: NodeId) -> &str {
    nodes.get(node.index()).map(Node::name).unwrap_or(UNKNOWN)
}

impl Coordinator {
    pub(crate) fn from_parts(id: Uuid, nodes: Vec<Node>, config: &CoordinatorConfig) -> Self {
        let names = nodes
            .iter()
            .map(|node| (node.name().to_string(), node.id()))
            .collect();
        Self {
            id,
            nodes,
            names,
            state: SlotState::Idle,
            pending_enter: VecDeque::new(),
            pending_exit: VecDeque::new(),
            trace: Trace::with_capacity(config.trace_capacity),
        }
    }

    /// Identity of this coordinator; every `NodeId` it issued carries it.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Check whether `node` was issued by this coordinator.
    pub fn contains(&self, node: NodeId) -> bool {
        node.owner() == self.id && node.index() < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        if self.contains(node) {
            self.nodes.get(node.index())
        } else {
            None
        }
    }

    pub fn node_mut(&mut self, node: NodeId) -> Result<&mut Node, NodeError> {
        if !self.contains(node) {
            return Err(NodeError::Unknown { node });
        }
        self.nodes
            .get_mut(node.index())
            .ok_or(NodeError::Unknown { node })
    }

    /// Look up a node by its registered name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Look up a member of a typed node set.
    pub fn node_of<N: NodeSet>(&self, node: N) -> Option<NodeId> {
        self.node_id(node.name())
    }

    /// Like [`node_id`](Self::node_id) but reports a missing name as an error.
    pub fn require_node(&self, name: &str) -> Result<NodeId, NodeError> {
        self.node_id(name).ok_or_else(|| NodeError::UnknownName {
            name: name.to_string(),
        })
    }

    /// Nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Nodes sorted by name.
    pub fn nodes_by_name(&self) -> impl Iterator<Item = &Node> {
        self.names.values().filter_map(|id| self.nodes.get(id.index()))
    }

    /// Append an enter subscriber to `node`.
    pub fn on_enter<F>(&mut self, node: NodeId, callback: F) -> Result<(), NodeError>
    where
        F: FnMut() + Send + 'static,
    {
        self.node_mut(node)?.register_on_enter(callback);
        Ok(())
    }

    /// Append an exit subscriber to `node`.
    pub fn on_exit<F>(&mut self, node: NodeId, callback: F) -> Result<(), NodeError>
    where
        F: FnMut() + Send + 'static,
    {
        self.node_mut(node)?.register_on_exit(callback);
        Ok(())
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn active(&self) -> Option<NodeId> {
        self.state.active()
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Pending-enter queue, front first.
    pub fn pending_enter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.pending_enter.iter().copied()
    }

    /// Pending-exit queue, front first.
    pub fn pending_exit(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.pending_exit.iter().copied()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    pub fn snapshot(&self) -> CoordinatorSnapshot {
        let names = |queue: &VecDeque<NodeId>| -> Vec<String> {
            queue
                .iter()
                .map(|id| name_in(&self.nodes, *id).to_string())
                .collect()
        };
        CoordinatorSnapshot {
            active: self
                .state
                .active()
                .map(|id| name_in(&self.nodes, id).to_string()),
            pending_enter: names(&self.pending_enter),
            pending_exit: names(&self.pending_exit),
        }
    }

    /// Return to idle and drop both queues without running any subscriber.
    pub fn reset(&mut self) {
        debug!(
            coordinator = %self.id,
            dropped_enters = self.pending_enter.len(),
            dropped_exits = self.pending_exit.len(),
            "resetting coordinator"
        );
        self.state = SlotState::Idle;
        self.pending_enter.clear();
        self.pending_exit.clear();
    }

    /// Signal that the engine wants `node` to become active.
    ///
    /// - Idle: `node` takes the slot and its enter subscribers fire. If
    ///   `node` is at the front of the pending-exit queue it is dequeued and
    ///   exited within the same call.
    /// - `node` already active: absorbed as [`Diagnostic::AlreadyActive`].
    /// - Another node active: `node` joins the back of the pending-enter
    ///   queue. Duplicates are not collapsed.
    pub fn request_enter(&mut self, node: NodeId) -> Outcome {
        self.resolve(Request::Enter(node))
    }

    /// Signal that the engine wants `node` to stop being active.
    ///
    /// - Idle: absorbed as [`Diagnostic::NoActiveNode`]; the request is
    ///   dropped, not queued.
    /// - `node` active: its exit subscribers fire and the slot becomes idle.
    ///   Then, if the pending-enter queue is non-empty, its front is dequeued
    ///   and entered unconditionally.
    /// - Another node active: `node` joins the back of the pending-exit
    ///   queue.
    pub fn request_exit(&mut self, node: NodeId) -> Outcome {
        self.resolve(Request::Exit(node))
    }

    /// Run the direct request, then every cascade it triggers, in one loop.
    ///
    /// Each step yields at most one follow-up request, so the chain is a
    /// sequence rather than a tree and needs no stack beyond this frame.
    fn resolve(&mut self, request: Request) -> Outcome {
        let (outcome, mut next) = self.step(request, 0);
        let mut depth = 0;
        while let Some(request) = next {
            depth += 1;
            next = self.step(request, depth).1;
        }
        outcome
    }

    fn step(&mut self, request: Request, depth: usize) -> (Outcome, Option<Request>) {
        match request {
            Request::Enter(node) => self.enter(node, depth),
            Request::Exit(node) => self.exit(node, depth),
        }
    }

    fn enter(&mut self, node: NodeId, depth: usize) -> (Outcome, Option<Request>) {
        if !self.contains(node) {
            return (self.ignore(Diagnostic::UnknownNode { node }, depth), None);
        }

        match self.state {
            SlotState::Idle => {
                self.state = SlotState::Active(node);
                self.fire(node, TraceEvent::Entered, depth);

                let cascade = if self.pending_exit.front() == Some(&node) {
                    self.pending_exit.pop_front().map(Request::Exit)
                } else {
                    None
                };
                (Outcome::Entered, cascade)
            }
            state if state.is_held_by(node) => {
                let name = name_in(&self.nodes, node).to_string();
                let outcome = self.ignore(Diagnostic::AlreadyActive { node, name }, depth);
                (outcome, None)
            }
            SlotState::Active(active) => {
                self.pending_enter.push_back(node);
                self.defer(node, active, TraceEvent::QueuedEnter, depth);
                (Outcome::Queued, None)
            }
        }
    }

    fn exit(&mut self, node: NodeId, depth: usize) -> (Outcome, Option<Request>) {
        if !self.contains(node) {
            return (self.ignore(Diagnostic::UnknownNode { node }, depth), None);
        }

        match self.state {
            SlotState::Idle => {
                let name = name_in(&self.nodes, node).to_string();
                let outcome = self.ignore(Diagnostic::NoActiveNode { node, name }, depth);
                (outcome, None)
            }
            state if state.is_held_by(node) => {
                self.fire(node, TraceEvent::Exited, depth);
                self.state = SlotState::Idle;

                let cascade = self.pending_enter.pop_front().map(Request::Enter);
                (Outcome::Exited, cascade)
            }
            SlotState::Active(active) => {
                self.pending_exit.push_back(node);
                self.defer(node, active, TraceEvent::QueuedExit, depth);
                (Outcome::Queued, None)
            }
        }
    }

    fn fire(&mut self, node: NodeId, event: TraceEvent, depth: usize) {
        let Some(target) = self.nodes.get_mut(node.index()) else {
            return;
        };
        debug!(
            coordinator = %self.id,
            node = target.name(),
            event = ?event,
            cascade_depth = depth,
            "firing subscribers"
        );
        self.trace.record(node, target.name(), event.clone(), depth);
        match event {
            TraceEvent::Entered => target.fire_enter(),
            TraceEvent::Exited => target.fire_exit(),
            _ => {}
        }
    }

    fn defer(&mut self, node: NodeId, active: NodeId, event: TraceEvent, depth: usize) {
        let name = name_in(&self.nodes, node);
        debug!(
            coordinator = %self.id,
            node = name,
            active = name_in(&self.nodes, active),
            event = ?event,
            pending_enter = self.pending_enter.len(),
            pending_exit = self.pending_exit.len(),
            "deferring request while slot is held"
        );
        self.trace.record(node, name, event, depth);
    }

    fn ignore(&mut self, diagnostic: Diagnostic, depth: usize) -> Outcome {
        let node = diagnostic.node();
        let name = if self.contains(node) {
            name_in(&self.nodes, node)
        } else {
            UNKNOWN
        };
        warn!(
            coordinator = %self.id,
            node = name,
            active = ?self.state.active().map(|id| name_in(&self.nodes, id)),
            "{}",
            diagnostic
        );
        self.trace
            .record(node, name, TraceEvent::Ignored(diagnostic.clone()), depth);
        Outcome::Ignored(diagnostic)
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("id", &self.id)
            .field("nodes", &self.nodes.len())
            .field("state", &self.state)
            .field("pending_enter", &self.pending_enter)
            .field("pending_exit", &self.pending_exit)
            .finish()
    }
}
