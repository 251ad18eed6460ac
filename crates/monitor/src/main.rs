//! Patient Monitor - Demo Entry Point

use monitor::{init_logging, run, script::demo_script, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Patient Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;
    let provider = demo_script(settings.frame_rate);
    run(provider, &settings).await?;

    Ok(())
}
