use almanac_app::cli::Cli;
use almanac_app::query::{open_store, run};
use almanac_core::config::load_config;
use almanac_service::recurrence::ExpansionLimits;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting almanac");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = open_store(&config.store).await?;
    let limits = ExpansionLimits::from(&config.engine);
    let today = chrono::Utc::now().date_naive();

    let occurrences = run(&store, cli.owner_id, &cli.range, today, limits).await?;

    tracing::info!(occurrence_count = occurrences.len(), "Query complete");
    println!("{}", serde_json::to_string_pretty(&occurrences)?);

    Ok(())
}
