//! Raw → clean copy steps.
//!
//! Each step runs in a single transaction. A failure anywhere drops the
//! transaction uncommitted, which rolls the whole step back.

use sqlx::{Connection, PgConnection};
use ventas_db::repositories::CleanSaleRepo;

/// Copy raw rows dated after the clean watermark. Returns rows inserted.
///
/// The comparison is strict: a raw row that arrives late with the same date
/// as the current watermark is skipped on this and every later run. Only a
/// [`full_refresh`] picks such rows up.
pub async fn run_incremental(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;

    let watermark = CleanSaleRepo::watermark(&mut tx).await?;
    tracing::info!(%watermark, "Last processed date");

    let inserted = CleanSaleRepo::copy_newer_than(&mut tx, watermark).await?;
    tx.commit().await?;

    tracing::info!(inserted, "Incremental load complete");
    Ok(inserted)
}

/// Rebuild the clean table as an exact copy of raw. Returns rows inserted.
pub async fn full_refresh(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
    let mut tx = conn.begin().await?;

    let deleted = CleanSaleRepo::delete_all(&mut tx).await?;
    let inserted = CleanSaleRepo::copy_all(&mut tx).await?;
    tx.commit().await?;

    tracing::info!(deleted, inserted, "Full refresh complete");
    Ok(inserted)
}
