// src/main.rs
//
// Connectivity check: runs one probe per resource group against the
// configured backend and reports the results.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use civilshield::application::AppState;
use civilshield::config::{ApiConfig, NotificationConfig};
use civilshield::logging::init_logging;
use civilshield::notifications::TerminalSurface;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. DIAGNOSTICS
    init_logging().context("failed to install log subscriber")?;

    // 2. CONFIGURATION
    let config = ApiConfig::from_env().context("invalid backend configuration")?;

    // 3. APPLICATION STATE
    let state = AppState::connect(
        config,
        Arc::new(TerminalSurface::stdout()),
        NotificationConfig::default(),
    )
    .context("failed to build HTTP client")?;

    println!("Testing API connection: {}\n", state.dispatcher.base_url());

    // 4. PROBES
    let report = state.connectivity.run_all().await;

    for result in &report.results {
        println!("{}", result);
    }

    println!(
        "\n{}/{} checks passed",
        report.passed_count(),
        report.results.len()
    );

    if report.all_passed() {
        state.notifications.success("Backend reachable");
        Ok(ExitCode::SUCCESS)
    } else {
        for failure in report.failures() {
            state.notifications.error(failure.to_string());
        }
        Ok(ExitCode::FAILURE)
    }
}
