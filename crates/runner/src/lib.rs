//! `ventas-runner` library crate.
//!
//! Triggers one of the server-side daily load procedures and reports how
//! many rows the target table holds afterwards. Each step opens and closes
//! its own connection. The binary entrypoint lives in `main.rs`.

use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection, PgConnection};
use ventas_core::load_mode::LoadMode;
use ventas_db::repositories::DailySalesRepo;

/// Call the load procedure for `mode` with auto-commit. Returns the
/// procedure name that ran.
pub async fn trigger(
    options: &PgConnectOptions,
    mode: LoadMode,
) -> Result<&'static str, sqlx::Error> {
    let procedure = mode.procedure_name();

    let mut conn = options.connect().await?;
    let called = DailySalesRepo::call_load_procedure(&mut conn, mode).await;
    close(conn).await;
    called?;

    tracing::info!(%mode, procedure, "Load procedure finished");
    Ok(procedure)
}

/// Count the rows of the daily sales table on a fresh read-only
/// connection.
pub async fn count_target_rows(options: &PgConnectOptions) -> Result<i64, sqlx::Error> {
    let mut conn = options.connect().await?;
    let counted = DailySalesRepo::count_read_only(&mut conn).await;
    close(conn).await;
    counted
}

async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection cleanly");
    }
}
