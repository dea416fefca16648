//! Trigger for the server-side daily load procedures.
//!
//! What the procedures do is owned by the database; this side only picks
//! one, calls it without arguments, and counts the resulting rows.

use sqlx::{Connection, PgConnection};
use ventas_core::load_mode::LoadMode;

use crate::DAILY_SALES_TABLE;

pub struct DailySalesRepo;

impl DailySalesRepo {
    /// `CALL` the procedure for `mode` outside any explicit transaction, so
    /// the server commits it as a single statement.
    pub async fn call_load_procedure(
        conn: &mut PgConnection,
        mode: LoadMode,
    ) -> Result<(), sqlx::Error> {
        let statement = format!("CALL {}()", mode.procedure_name());
        sqlx::raw_sql(&statement).execute(conn).await?;
        Ok(())
    }

    /// Count rows in `ventas_diarias` inside a read-only transaction.
    pub async fn count_read_only(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let mut tx = conn.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;
        let query = format!("SELECT COUNT(*) FROM {DAILY_SALES_TABLE}");
        let (count,): (i64,) = sqlx::query_as(&query).fetch_one(&mut *tx).await?;
        tx.commit().await?;
        Ok(count)
    }
}
