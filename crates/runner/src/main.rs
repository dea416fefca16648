//! `ventas-diarias` -- trigger the server-side daily sales load.
//!
//! Usage: `ventas-diarias [full|incremental]` (case-insensitive; anything
//! other than `full` runs the incremental procedure).
//!
//! Connection settings come from the `SQL_*` variables documented in
//! `ventas_core::config`.

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ventas_core::config::DbConfig;
use ventas_core::load_mode::LoadMode;
use ventas_db::DAILY_SALES_TABLE;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ventas_runner=info,ventas_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Daily load failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let arg = std::env::args().nth(1);
    let mode = LoadMode::from_arg(arg.as_deref());

    let config = DbConfig::from_env().context("Invalid database configuration")?;
    let options = ventas_db::connect_options(&config).context("Invalid database URL")?;

    let procedure = ventas_runner::trigger(&options, mode)
        .await
        .with_context(|| format!("{mode} load procedure failed"))?;
    println!("OK: {procedure}");

    let rows = ventas_runner::count_target_rows(&options)
        .await
        .context("Counting loaded rows failed")?;
    println!("rows in {DAILY_SALES_TABLE}: {rows}");
    Ok(())
}
