//! `ventas-pipeline` library crate.
//!
//! Raw → clean sales load steps plus the simulated demo run. The binary
//! entrypoint lives in `main.rs`.

pub mod command;
pub mod demo;
pub mod load;
pub mod simulation;

use chrono::NaiveDate;
use sqlx::{Connection, PgConnection};
use ventas_core::config::DbConfig;
use ventas_db::models::sale::LoadSummary;
use ventas_db::schema::ensure_tables;

use crate::command::PipelineCommand;

/// Options for a single pipeline invocation.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub command: PipelineCommand,
    /// Reference date for the simulated days.
    pub today: NaiveDate,
    pub rows_per_day: usize,
}

/// Open one connection, run `options.command` on it, and close it again
/// whether or not the command succeeded.
pub async fn run(config: &DbConfig, options: RunOptions) -> Result<LoadSummary, sqlx::Error> {
    let mut conn = ventas_db::connect(config).await?;

    let outcome = execute(&mut conn, options).await;

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection cleanly");
    }
    outcome
}

/// Run `options.command` on an already open connection.
pub async fn execute(
    conn: &mut PgConnection,
    options: RunOptions,
) -> Result<LoadSummary, sqlx::Error> {
    ventas_db::health_check(conn).await?;
    tracing::info!(command = %options.command, "Pipeline starting");

    match options.command {
        PipelineCommand::Demo => demo::run_demo(conn, options.today, options.rows_per_day).await,
        PipelineCommand::Incremental => {
            ensure_tables(conn).await?;
            load::run_incremental(conn).await?;
            summarize_and_log(conn).await
        }
        PipelineCommand::Full => {
            ensure_tables(conn).await?;
            load::full_refresh(conn).await?;
            summarize_and_log(conn).await
        }
    }
}

async fn summarize_and_log(conn: &mut PgConnection) -> Result<LoadSummary, sqlx::Error> {
    let summary = demo::summarize(conn).await?;
    demo::log_summary(&summary);
    Ok(summary)
}
