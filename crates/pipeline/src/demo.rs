//! Three-day simulated run of the incremental pipeline.

use chrono::{Duration, NaiveDate};
use sqlx::PgConnection;
use ventas_db::models::sale::LoadSummary;
use ventas_db::repositories::{CleanSaleRepo, RawSaleRepo};
use ventas_db::schema::ensure_tables;

use crate::load::run_incremental;
use crate::simulation::simulate_day;

/// Days before "today" that get synthetic rows, oldest first.
pub const SIMULATED_DAY_OFFSETS: [i64; 3] = [2, 1, 0];

/// Default number of synthetic rows per simulated day.
pub const DEFAULT_ROWS_PER_DAY: usize = 3;

/// Ensure the schema, catch up on existing raw rows, then simulate
/// `today - 2`, `today - 1` and `today`, running an incremental pass after
/// each day. Returns the closing summary.
pub async fn run_demo(
    conn: &mut PgConnection,
    today: NaiveDate,
    rows_per_day: usize,
) -> Result<LoadSummary, sqlx::Error> {
    ensure_tables(conn).await?;

    // Pick up anything already waiting in raw.
    run_incremental(conn).await?;

    for offset in SIMULATED_DAY_OFFSETS {
        let day = today - Duration::days(offset);
        simulate_day(conn, day, rows_per_day).await?;
        run_incremental(conn).await?;
    }

    let summary = summarize(conn).await?;
    log_summary(&summary);
    Ok(summary)
}

/// Row counts of both tables plus the clean date span.
pub async fn summarize(conn: &mut PgConnection) -> Result<LoadSummary, sqlx::Error> {
    let raw_rows = RawSaleRepo::count(conn).await?;
    let clean_rows = CleanSaleRepo::count(conn).await?;
    let (first_date, last_date) = CleanSaleRepo::date_range(conn).await?;
    Ok(LoadSummary {
        raw_rows,
        clean_rows,
        first_date,
        last_date,
    })
}

pub(crate) fn log_summary(summary: &LoadSummary) {
    tracing::info!(
        raw = summary.raw_rows,
        clean = summary.clean_rows,
        first_date = ?summary.first_date,
        last_date = ?summary.last_date,
        "Summary",
    );
}
