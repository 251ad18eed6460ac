//! Patient Monitor
//!
//! Watches a single video stream and raises three independent alert classes:
//! - Fall / patient missing (body absent past a threshold)
//! - Possible stroke (mouth asymmetry above a threshold)
//! - Confirmed hand gesture (finger pattern held past a dwell time)
//!
//! Perception (pose, face mesh, hand tracking) is an external collaborator
//! behind the `PerceptionProvider` trait; this crate wires the decision logic
//! into a frame-synchronous loop and a console presentation.

pub mod engine;
pub mod script;
pub mod settings;

pub use engine::MonitorEngine;
pub use settings::Settings;

use alert_arbiter::{DisplayState, StatusColor};
use perception::PerceptionProvider;
use std::time::{Duration, Instant};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize the global tracing subscriber
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Render one frame's display to stdout.
///
/// Mirrors the overlay composition: the alert banner first, the always-on
/// status line, then any advisory countdowns.
pub fn render(display: &DisplayState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(display)?);
        return Ok(());
    }

    if let Some(banner) = display.banner {
        println!("ALERT: {banner}");
    }
    let color = match display.status_color {
        StatusColor::Normal => "green",
        StatusColor::Alert => "red",
    };
    println!("Status: {} [{}]", display.status_text, color);
    if let Some(countdown) = &display.countdown_text {
        println!("  {countdown}");
    }
    if let Some(search) = &display.search_text {
        println!("  {search}");
    }
    Ok(())
}

/// Run the paced frame loop over a provider until its stream ends.
///
/// A failed frame is skipped without touching tracker state; only delivered
/// observations advance the engine.
pub async fn run<P: PerceptionProvider>(
    mut provider: P,
    settings: &Settings,
) -> anyhow::Result<()> {
    let mut engine = MonitorEngine::new(&settings.vitals(), &settings.gesture());
    let frame_interval = Duration::from_secs_f32(1.0 / settings.frame_rate.max(1) as f32);
    let mut ticker = tokio::time::interval(frame_interval);

    info!(
        frame_rate = settings.frame_rate,
        preset = ?settings.gesture_preset,
        "monitoring started"
    );

    loop {
        ticker.tick().await;
        match provider.next_observation() {
            Ok(Some(observation)) => {
                let display = engine.process(&observation, Instant::now());
                render(&display, settings.json_output)?;
            }
            Ok(None) => {
                info!("observation stream ended");
                return Ok(());
            }
            Err(err) => {
                // Skip the tick; do not advance any tracker state.
                warn!(error = %err, "frame skipped");
            }
        }
    }
}
