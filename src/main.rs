//! agent2d - drive a tank through a scripted, fixed-step run
//!
//! Reads `config/`, runs the configured number of ticks and logs a summary.

use agent2d::config::AppConfig;
use agent2d::simulation::SimulationSystem;

fn main() {
    let loaded = AppConfig::load();

    // RUST_LOG wins over debug.log_level
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut simulation = SimulationSystem::new(&config);
    let summary = simulation.run(config.simulation.ticks);

    let moved = summary.displacement();
    log::info!(
        "Net displacement ({:.2}, {:.2}) over {} draw calls",
        moved.x,
        moved.y,
        summary.draw_commands
    );
}
