//! Bounded record of what the coordinator did.
//!
//! Every fired subscriber list, queue append and absorbed diagnostic can be
//! recorded as a [`TraceEntry`]. The trace keeps at most `capacity`
//! entries and evicts the oldest first; a capacity of zero disables it.

use super::diagnostic::Diagnostic;
use super::node::NodeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What happened to a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// Enter subscribers fired; the node took the slot.
    Entered,
    /// Exit subscribers fired; the slot became idle.
    Exited,
    /// Entry deferred to the back of the pending-enter queue.
    QueuedEnter,
    /// Exit deferred to the back of the pending-exit queue.
    QueuedExit,
    /// Request absorbed without a state change.
    Ignored(Diagnostic),
}

impl TraceEvent {
    /// True for events that ran subscribers.
    pub fn is_fired(&self) -> bool {
        matches!(self, Self::Entered | Self::Exited)
    }
}

/// Single recorded event.
///
/// `cascade_depth` is zero for the request the caller made directly and
/// grows by one for each same-call resolution chained from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub node: NodeId,
    pub name: String,
    pub event: TraceEvent,
    pub cascade_depth: usize,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded trace of coordinator events.
///
/// # Example
///
/// ```rust
/// use exclusive_state::CoordinatorBuilder;
/// use exclusive_state::core::TraceEvent;
///
/// let mut coordinator = CoordinatorBuilder::new().node("A").build().unwrap();
/// let a = coordinator.node_id("A").unwrap();
///
/// coordinator.request_enter(a);
/// coordinator.request_exit(a);
///
/// let events: Vec<_> = coordinator.trace().fired().map(|e| e.event.clone()).collect();
/// assert_eq!(events, vec![TraceEvent::Entered, TraceEvent::Exited]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trace {
    entries: VecDeque<TraceEntry>,
    capacity: usize,
}

impl Trace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn record(
        &mut self,
        node: NodeId,
        name: &str,
        event: TraceEvent,
        cascade_depth: usize,
    ) {
        if !self.is_enabled() {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(TraceEntry {
            node,
            name: name.to_string(),
            event,
            cascade_depth,
            timestamp: Utc::now(),
        });
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter()
    }

    /// Only the entries that ran subscribers, oldest first.
    pub fn fired(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter().filter(|e| e.event.is_fired())
    }

    /// Only the absorbed diagnostics, oldest first.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter_map(|e| match &e.event {
            TraceEvent::Ignored(diagnostic) => Some(diagnostic),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn id(index: u32) -> NodeId {
        NodeId::new(Uuid::nil(), index)
    }

    #[test]
    fn disabled_trace_records_nothing() {
        let mut trace = Trace::with_capacity(0);
        trace.record(id(0), "A", TraceEvent::Entered, 0);
        assert!(!trace.is_enabled());
        assert!(trace.is_empty());
    }

    #[test]
    fn oldest_entries_are_evicted() {
        let mut trace = Trace::with_capacity(2);
        trace.record(id(0), "A", TraceEvent::Entered, 0);
        trace.record(id(0), "A", TraceEvent::Exited, 0);
        trace.record(id(1), "B", TraceEvent::Entered, 1);

        let names: Vec<_> = trace.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn restored_trace_over_capacity_is_trimmed_on_record() {
        let mut large = Trace::with_capacity(8);
        for index in 0..5 {
            large.record(id(index), "N", TraceEvent::Entered, 0);
        }
        let mut json = serde_json::to_value(&large).unwrap();
        json["capacity"] = serde_json::json!(2);
        let mut restored: Trace = serde_json::from_value(json).unwrap();
        assert_eq!(restored.len(), 5);

        restored.record(id(9), "Z", TraceEvent::Exited, 0);

        assert_eq!(restored.len(), 2);
        let nodes: Vec<_> = restored.entries().map(|e| e.node.index()).collect();
        assert_eq!(nodes, vec![4, 9]);
    }

    #[test]
    fn fired_skips_queue_and_diagnostic_entries() {
        let mut trace = Trace::with_capacity(8);
        trace.record(id(0), "A", TraceEvent::Entered, 0);
        trace.record(id(1), "B", TraceEvent::QueuedEnter, 0);
        trace.record(
            id(0),
            "A",
            TraceEvent::Ignored(Diagnostic::AlreadyActive {
                node: id(0),
                name: "A".to_string(),
            }),
            0,
        );

        assert_eq!(trace.fired().count(), 1);
        assert_eq!(trace.diagnostics().count(), 1);
    }

    #[test]
    fn timestamps_are_non_decreasing() {
        let mut trace = Trace::with_capacity(4);
        trace.record(id(0), "A", TraceEvent::Entered, 0);
        trace.record(id(0), "A", TraceEvent::Exited, 0);

        let stamps: Vec<_> = trace.entries().map(|e| e.timestamp).collect();
        assert!(stamps[0] <= stamps[1]);
    }

    #[test]
    fn trace_serializes_correctly() {
        let mut trace = Trace::with_capacity(4);
        trace.record(id(0), "A", TraceEvent::Entered, 0);
        trace.record(id(1), "B", TraceEvent::QueuedExit, 0);

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 2);
        assert_eq!(deserialized.capacity(), 4);
        assert_eq!(
            deserialized.entries().collect::<Vec<_>>(),
            trace.entries().collect::<Vec<_>>()
        );
    }
}
