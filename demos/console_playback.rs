//! Console Playback Walkthrough
//!
//! Picks an automaton from the shipped library, replays its construction
//! step by step, then animates a string test to its verdict — all through
//! a text renderer on stdout.
//!
//! Key concepts:
//! - Loading a library automaton into the playback controller
//! - Driving scheduled timers with the async `run_pending` loop
//! - Receiving render callbacks through the `RenderSink` seam
//!
//! Run with: cargo run --example console_playback

use dfastage::engine::SimulationEvent;
use dfastage::library::library;
use dfastage::playback::{Highlight, PlaybackController, RenderSink};
use dfastage::sequence::ConstructionEvent;
use dfastage::store::export_json;
use std::time::Duration;

struct ConsoleRenderer;

impl RenderSink for ConsoleRenderer {
    fn clear(&mut self) {
        println!("  [canvas cleared]");
    }

    fn construction_event(&mut self, event: &ConstructionEvent) {
        println!("  build: {}", event.description());
    }

    fn simulation_event(&mut self, event: &SimulationEvent, highlight: &Highlight) {
        match event {
            SimulationEvent::Started { state } => println!("  run: starting at {state}"),
            _ => {
                if let Some(message) = event.message() {
                    println!("  run: {message}");
                }
            }
        }
        if let Some(transition) = &highlight.transition {
            println!(
                "       highlighting edge {} -> {}",
                transition.from, transition.to
            );
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Console Playback Walkthrough ===\n");

    let categories = library();
    println!("Library categories:");
    for category in &categories {
        println!("  {} ({} automata)", category.display_name, category.automata.len());
    }

    let automaton = categories
        .into_iter()
        .next()
        .and_then(|c| c.automata.into_iter().next())
        .expect("library is not empty");

    println!("\nSelected: {} — {}\n", automaton.name, automaton.description);

    let mut controller = PlaybackController::new(ConsoleRenderer);
    controller.set_speed(Duration::from_millis(50));

    println!("Constructing:");
    controller
        .load(automaton.clone())
        .expect("library automaton is valid");
    controller.run_pending().await;

    for input in ["ba", "ab", ""] {
        println!("\nTesting {input:?}:");
        controller
            .run_simulation(input)
            .expect("input is within the alphabet");
        controller.run_pending().await;
    }

    println!("\nCanonical export:");
    println!(
        "{}",
        export_json(&automaton).expect("library automaton exports")
    );

    println!("\n=== Walkthrough Complete ===");
}
