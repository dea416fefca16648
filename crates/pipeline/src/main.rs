//! `ventas-incremental` -- raw → clean sales loader.
//!
//! Ensures the sales tables, then runs one of:
//!
//! - `demo` (default): incremental pass, then three simulated days each
//!   followed by an incremental pass, then a summary.
//! - `incremental`: a single incremental pass.
//! - `full`: a single full refresh of the clean table.
//!
//! Connection settings come from the `SQL_*` variables documented in
//! `ventas_core::config`. `SIM_ROWS_PER_DAY` (default `3`) sets the number
//! of synthetic rows per simulated day.

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ventas_core::config::DbConfig;
use ventas_pipeline::command::PipelineCommand;
use ventas_pipeline::demo::DEFAULT_ROWS_PER_DAY;
use ventas_pipeline::RunOptions;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ventas_pipeline=info,ventas_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Pipeline run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let arg = std::env::args().nth(1);
    let command = PipelineCommand::from_arg(arg.as_deref())?;

    let rows_per_day = match std::env::var("SIM_ROWS_PER_DAY") {
        Ok(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("SIM_ROWS_PER_DAY must be a non-negative integer, got {raw:?}"))?,
        Err(_) => DEFAULT_ROWS_PER_DAY,
    };

    let config = DbConfig::from_env().context("Invalid database configuration")?;

    let options = RunOptions {
        command,
        today: chrono::Local::now().date_naive(),
        rows_per_day,
    };

    let summary = ventas_pipeline::run(&config, options)
        .await
        .context("Database error")?;

    tracing::info!(
        raw = summary.raw_rows,
        clean = summary.clean_rows,
        "Pipeline finished",
    );
    Ok(())
}
