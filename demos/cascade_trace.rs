//! Cascade Trace
//!
//! This example queues several conflicting requests and prints the trace
//! produced when a single exit resolves them all in one call.
//!
//! Key concepts:
//! - Deferred enter and exit requests
//! - Same-call cascades and their depth
//! - Exporting the trace as JSON
//!
//! Run with: cargo run --example cascade_trace

use exclusive_state::{CoordinatorBuilder, CoordinatorConfig};

fn main() {
    println!("=== Cascade Trace ===\n");

    let mut coordinator = CoordinatorBuilder::new()
        .nodes(["Intro", "Menu", "Loading"])
        .config(CoordinatorConfig::new().trace_capacity(32))
        .build()
        .unwrap();

    let intro = coordinator.node_id("Intro").unwrap();
    let menu = coordinator.node_id("Menu").unwrap();
    let loading = coordinator.node_id("Loading").unwrap();

    coordinator.request_enter(intro);
    coordinator.request_enter(menu);
    coordinator.request_enter(loading);
    coordinator.request_exit(menu);

    println!("Before Intro exits: {:?}\n", coordinator.snapshot());

    coordinator.clear_trace();
    coordinator.request_exit(intro);

    println!("Resolved in one call:");
    for entry in coordinator.trace().entries() {
        println!(
            "  depth {} {:<8} {:?}",
            entry.cascade_depth, entry.name, entry.event
        );
    }

    println!("\nAfter: {:?}", coordinator.snapshot());
    println!(
        "\nTrace as JSON:\n{}",
        serde_json::to_string_pretty(coordinator.trace()).unwrap()
    );

    println!("\n=== Example Complete ===");
}
