//! End-to-end scenarios through the public API.

use exclusive_state::core::{Diagnostic, Trace, TraceEvent};
use exclusive_state::{
    Coordinator, CoordinatorBuilder, CoordinatorConfig, Driver, NodeId, Outcome, SlotState,
};
use std::sync::{Arc, Mutex, Once};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

struct Harness {
    coordinator: Coordinator,
    log: Arc<Mutex<Vec<String>>>,
}

impl Harness {
    fn new(names: &[&str]) -> Self {
        Self::with_config(names, CoordinatorConfig::default())
    }

    fn with_config(names: &[&str], config: CoordinatorConfig) -> Self {
        init_tracing();
        let mut coordinator = CoordinatorBuilder::new()
            .nodes(names.iter().copied())
            .config(config)
            .build()
            .unwrap();
        let log = Arc::new(Mutex::new(Vec::new()));

        for name in names {
            let id = coordinator.node_id(name).unwrap();
            let node = coordinator.node_mut(id).unwrap();
            let (enter_log, enter_tag) = (Arc::clone(&log), format!("{name}.onEnter"));
            let (exit_log, exit_tag) = (Arc::clone(&log), format!("{name}.onExit"));
            node.register_on_enter(move || enter_log.lock().unwrap().push(enter_tag.clone()))
                .register_on_exit(move || exit_log.lock().unwrap().push(exit_tag.clone()));
        }

        Self { coordinator, log }
    }

    fn id(&self, name: &str) -> NodeId {
        self.coordinator.node_id(name).unwrap()
    }

    fn enter(&mut self, name: &str) -> Outcome {
        let id = self.id(name);
        self.coordinator.request_enter(id)
    }

    fn exit(&mut self, name: &str) -> Outcome {
        let id = self.id(name);
        self.coordinator.request_exit(id)
    }

    fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.log.lock().unwrap())
    }
}

#[test]
fn enter_a_enter_b_exit_a() {
    let mut h = Harness::new(&["A", "B"]);

    assert_eq!(h.enter("A"), Outcome::Entered);
    assert_eq!(h.enter("B"), Outcome::Queued);
    assert_eq!(h.exit("A"), Outcome::Exited);

    assert_eq!(h.drain(), vec!["A.onEnter", "A.onExit", "B.onEnter"]);
    assert_eq!(h.coordinator.state(), SlotState::Active(h.id("B")));
}

#[test]
fn fifo_resolution_keeps_later_arrivals_queued() {
    let mut h = Harness::new(&["A", "B", "C"]);

    h.enter("A");
    h.enter("B");
    h.enter("C");
    h.exit("A");

    assert_eq!(h.drain(), vec!["A.onEnter", "A.onExit", "B.onEnter"]);
    assert_eq!(h.coordinator.snapshot().pending_enter, vec!["C"]);
}

#[test]
fn cascading_exit_on_entry() {
    let mut h = Harness::new(&["A", "B"]);

    h.enter("A");
    assert_eq!(h.exit("B"), Outcome::Queued);
    assert_eq!(h.exit("A"), Outcome::Exited);
    assert!(h.coordinator.is_idle());
    h.drain();

    assert_eq!(h.enter("B"), Outcome::Entered);

    assert_eq!(h.drain(), vec!["B.onEnter", "B.onExit"]);
    assert!(h.coordinator.is_idle());
    assert!(h.coordinator.snapshot().is_settled());
}

#[test]
fn cascading_auto_entry_on_exit() {
    let mut h = Harness::new(&["A", "B"]);

    h.enter("A");
    h.enter("B");
    h.drain();
    h.exit("A");

    assert_eq!(h.drain(), vec!["A.onExit", "B.onEnter"]);
    assert_eq!(h.coordinator.active(), Some(h.id("B")));
}

#[test]
fn repeated_idle_exits_only_produce_diagnostics() {
    let mut h = Harness::new(&["A", "B"]);

    for name in ["A", "B", "A", "A"] {
        let outcome = h.exit(name);
        assert!(matches!(
            outcome,
            Outcome::Ignored(Diagnostic::NoActiveNode { .. })
        ));
    }

    assert!(h.coordinator.is_idle());
    assert!(h.coordinator.snapshot().is_settled());
    assert!(h.drain().is_empty());
    assert_eq!(h.coordinator.trace().diagnostics().count(), 4);
}

/// Exiting the active node enters the pending-enter head without asking
/// whether that node is still wanted, while entering a node only looks at
/// the very front of the pending-exit queue. Both behaviours are kept as-is.
#[test]
fn resolution_is_asymmetric_between_queues() {
    let mut h = Harness::new(&["A", "B", "C"]);

    h.enter("A");
    h.enter("B");
    h.exit("C");
    h.exit("B");
    h.drain();

    h.exit("A");

    // B's exit was requested before A left, yet B is entered and stays
    // active because C's exit sits in front of it.
    assert_eq!(h.drain(), vec!["A.onExit", "B.onEnter"]);
    assert_eq!(h.coordinator.active(), Some(h.id("B")));
    assert_eq!(h.coordinator.snapshot().pending_exit, vec!["C", "B"]);

    // Exiting B now resolves nothing further: the enter queue is empty and
    // exit requests are never replayed on their own.
    assert_eq!(h.exit("B"), Outcome::Exited);
    assert!(h.coordinator.is_idle());
    assert_eq!(h.coordinator.snapshot().pending_exit, vec!["C", "B"]);

    // C is at the front, so entering C clears it immediately.
    h.drain();
    h.enter("C");
    assert_eq!(h.drain(), vec!["C.onEnter", "C.onExit"]);
    assert_eq!(h.coordinator.snapshot().pending_exit, vec!["B"]);
}

#[test]
fn panicking_subscriber_propagates_to_caller() {
    let mut h = Harness::new(&["A"]);
    let a = h.id("A");
    h.coordinator
        .on_enter(a, || panic!("subscriber failed"))
        .unwrap();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        h.coordinator.request_enter(a)
    }));

    assert!(result.is_err());
    // The slot was taken before subscribers ran.
    assert_eq!(h.coordinator.active(), Some(a));
    assert_eq!(h.drain(), vec!["A.onEnter"]);
}

#[test]
fn debug_logs_run_before_user_subscribers() {
    let mut h = Harness::with_config(&["A"], CoordinatorConfig::new().debug_logs(true));
    let node = h.coordinator.node(h.id("A")).unwrap();

    assert_eq!(node.enter_subscribers(), 2);
    assert_eq!(h.enter("A"), Outcome::Entered);
    assert_eq!(h.exit("A"), Outcome::Exited);
    assert_eq!(h.drain(), vec!["A.onEnter", "A.onExit"]);
}

#[test]
fn disabled_trace_stays_empty() {
    let mut h = Harness::with_config(&["A", "B"], CoordinatorConfig::new().trace_capacity(0));

    h.enter("A");
    h.enter("B");
    h.exit("A");

    assert!(h.coordinator.trace().is_empty());
    assert_eq!(h.drain().len(), 3);
}

#[test]
fn trace_exports_as_json() {
    let mut h = Harness::new(&["A", "B"]);
    h.enter("A");
    h.enter("B");
    h.exit("A");

    let json = serde_json::to_string(h.coordinator.trace()).unwrap();
    let restored: Trace = serde_json::from_str(&json).unwrap();

    let events: Vec<_> = restored.entries().map(|e| (e.name.clone(), e.event.clone())).collect();
    assert_eq!(
        events,
        vec![
            ("A".to_string(), TraceEvent::Entered),
            ("B".to_string(), TraceEvent::QueuedEnter),
            ("A".to_string(), TraceEvent::Exited),
            ("B".to_string(), TraceEvent::Entered),
        ]
    );
}

#[test]
fn snapshot_exports_as_json() {
    let mut h = Harness::new(&["A", "B"]);
    h.enter("A");
    h.exit("B");

    let json = serde_json::to_value(h.coordinator.snapshot()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "active": "A",
            "pending_enter": [],
            "pending_exit": ["B"],
        })
    );
}

#[test]
fn driver_keeps_engines_apart() {
    init_tracing();
    let build = || {
        CoordinatorBuilder::new()
            .nodes(["Idle", "Walk"])
            .build()
            .unwrap()
    };
    let mut driver = Driver::new();
    driver.bind("left", build()).unwrap();
    driver.bind("right", build()).unwrap();

    driver.notify_enter_named(&"left", "Idle").unwrap();
    driver.notify_enter_named(&"right", "Walk").unwrap();
    driver.notify_enter_named(&"left", "Walk").unwrap();
    driver.notify_exit_named(&"left", "Idle").unwrap();

    let left = driver.coordinator(&"left").unwrap().snapshot();
    let right = driver.coordinator(&"right").unwrap().snapshot();
    assert_eq!(left.active.as_deref(), Some("Walk"));
    assert_eq!(right.active.as_deref(), Some("Walk"));
    assert!(left.is_settled() && right.is_settled());
    assert!(driver.notify_exit_named(&"middle", "Idle").is_err());
}
