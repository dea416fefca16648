//! Idempotent DDL for the raw and clean sales tables.

use sqlx::{Connection, PgConnection};

use crate::{CLEAN_TABLE, RAW_TABLE};

fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} ( \
             id BIGINT PRIMARY KEY, \
             cliente_id INTEGER NOT NULL, \
             producto_id INTEGER NOT NULL, \
             fecha DATE NOT NULL, \
             monto NUMERIC(12,2) NOT NULL \
         )"
    )
}

/// Create both sales tables if they are missing and commit immediately.
///
/// Existing tables are left untouched, so this is safe to run on every start.
pub async fn ensure_tables(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;
    for table in [RAW_TABLE, CLEAN_TABLE] {
        sqlx::query(&create_table_sql(table))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::debug!(raw = RAW_TABLE, clean = CLEAN_TABLE, "Sales tables ensured");
    Ok(())
}
