//! Out-of-Order Engine Replay
//!
//! This example replays a recorded stream of engine signals in which the
//! next state's entry often arrives before the previous state's exit.
//!
//! Key concepts:
//! - Binding a coordinator to an engine handle through a `Driver`
//! - Typed node names with `node_set!`
//! - Subscribers only ever see one active state
//!
//! Run with: cargo run --example engine_replay

use exclusive_state::core::NodeSet;
use exclusive_state::{node_set, CoordinatorBuilder, Driver};

node_set! {
    enum Locomotion {
        Idle,
        Walk,
        Run,
    }
}

#[derive(Clone, Copy, Debug)]
enum Signal {
    Enter(Locomotion),
    Exit(Locomotion),
}

fn main() {
    println!("=== Out-of-Order Engine Replay ===\n");

    let mut coordinator = CoordinatorBuilder::new()
        .node_set::<Locomotion>()
        .build()
        .unwrap();

    for state in Locomotion::all() {
        let id = coordinator.node_of(*state).unwrap();
        let name = state.name();
        coordinator
            .on_enter(id, move || println!("    -> {name} entered"))
            .unwrap();
        coordinator
            .on_exit(id, move || println!("    <- {name} exited"))
            .unwrap();
    }

    let engine = 1u32;
    let mut driver = Driver::new();
    driver.bind(engine, coordinator).unwrap();

    // Blending makes the engine report each new state one step early.
    let recording = [
        Signal::Enter(Locomotion::Idle),
        Signal::Enter(Locomotion::Walk),
        Signal::Exit(Locomotion::Idle),
        Signal::Enter(Locomotion::Run),
        Signal::Exit(Locomotion::Walk),
        Signal::Exit(Locomotion::Run),
    ];

    for signal in recording {
        println!("engine: {signal:?}");
        let outcome = match signal {
            Signal::Enter(state) => driver.notify_enter_set(&engine, state),
            Signal::Exit(state) => driver.notify_exit_set(&engine, state),
        }
        .unwrap();
        println!("    outcome: {outcome:?}");
    }

    let snapshot = driver.coordinator(&engine).unwrap().snapshot();
    println!("\nFinal active state: {:?}", snapshot.active);
    println!("Queues settled: {}", snapshot.is_settled());

    println!("\n=== Example Complete ===");
}
