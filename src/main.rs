use std::sync::Arc;

use anyhow::Context;
use revenue_report::config::Config;
use revenue_report::locations::LocationFilter;
use revenue_report::reports::{ReportFormatter, ReportState, ReportingStateMachine};
use revenue_report::revenue::{RevenueQueryClient, RowSelection};
use revenue_report::sessions::EnvSessionProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.logging.init();
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting revenue report");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Revenue API: {}", config.api.normalized_base_url());

    let client = RevenueQueryClient::new(&config.api).context("Failed to build HTTP client")?;
    let machine = ReportingStateMachine::new(Arc::new(client), Arc::new(EnvSessionProvider));

    machine.activate().await;

    let catalog = machine.catalog_state();
    match &catalog.error {
        Some(error) => eprintln!("Daftar lokasi tidak tersedia: {}", error),
        None => {
            let names: Vec<String> = catalog.entries.iter().map(|e| e.to_string()).collect();
            println!("Lokasi: {}", names.join(", "));
        }
    }

    if let Some(location) = std::env::args().nth(1) {
        machine.select_filter(LocationFilter::only(location)).await;
    }

    match machine.state() {
        ReportState::Loaded { filter, rows } => {
            println!("Pendapatan per lokasi ({})", filter);
            print!("{}", ReportFormatter::render(&rows));
        }
        ReportState::NoData { .. } => {
            print!("{}", ReportFormatter::render(&RowSelection::NoData));
        }
        ReportState::Error { failure, .. } => {
            anyhow::bail!("{}", failure.message);
        }
        other => anyhow::bail!("Report did not settle (state: {})", other.name()),
    }

    Ok(())
}
