//! Scroll Reveal Example - Feature grid entrance driven by a viewport
//!
//! This example demonstrates:
//! - Mounting the feature grid against a scrollable viewport
//! - The root margin holding the reveal back until the grid is well inside
//! - Staggered per-card poses sampled with a hand-driven clock
//! - Rendering both sections to HTML
//!
//! Run with: cargo run --example scroll_reveal

use std::rc::Rc;
use std::time::Duration;

use bento_landing::{
    GridFrame, ManualClock, RevealConfig, TargetRect, Viewport, compatibility_table, feature_grid,
    landing_sections, mount_grid,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("=== bento-landing Scroll Reveal Example ===\n");

    let table = compatibility_table()?;
    let grid = feature_grid()?;
    let config = RevealConfig::from_json(r#"{ "rootMargin": -80, "staggerMs": 80 }"#)?;

    // Grid container sits 1200px down the page and is 520px tall
    let viewport = Viewport::new(800.0);
    let clock = Rc::new(ManualClock::new());
    let handle = mount_grid(grid, Some(TargetRect::new(1200.0, 520.0)), &viewport, clock.clone(), config);

    for _ in 0..8 {
        clock.advance(Duration::from_millis(100));
        viewport.scroll_by(60.0);
        println!(
            "t={:>4}ms scroll={:>4} state={:<6} observing={}",
            clock_ms(&clock),
            viewport.scroll_y(),
            handle.state().as_str(),
            handle.is_observing()
        );
    }

    println!("\nEntrance (card poses every 120ms):");
    while !handle.is_settled() {
        let frame = handle.frame();
        let row: Vec<String> = frame
            .poses()
            .iter()
            .map(|p| format!("{:.2}", p.opacity))
            .collect();
        println!("t={:>4}ms opacity [{}]", clock_ms(&clock), row.join(" "));
        clock.advance(Duration::from_millis(120));
    }

    // Scrolling away never replays the entrance
    viewport.scroll_to(0.0);
    println!("\nScrolled back to top, state={}", handle.state().as_str());

    let html = landing_sections(&table, &grid, &handle.frame());
    println!("\n--- settled markup ({} bytes) ---", html.0.len());
    println!("{}", html.into_string());

    let preview = landing_sections(&table, &grid, &GridFrame::hidden(&grid, handle.config()));
    println!("\n--- pre-reveal markup ({} bytes) ---", preview.0.len());

    handle.unmount();
    Ok(())
}

fn clock_ms(clock: &ManualClock) -> u128 {
    use bento_landing::Clock;
    clock.now().as_millis()
}
