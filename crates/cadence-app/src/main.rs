use cadence_app::cli::{Cli, run};
use cadence_core::config::load_config;
use cadence_service::repeat::RepeatEventManager;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    // stdout carries command output, logs go to stderr
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let manager = RepeatEventManager::from_settings(&config)?;
    tracing::debug!(
        default_horizon_days = manager.default_horizon_days(),
        "Repeat manager ready"
    );

    let output = run(&cli, &manager, std::io::stdin().lock())?;
    println!("{output}");

    Ok(())
}
