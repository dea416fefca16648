//! Repository for the `ventas_crudas` landing table.

use sqlx::PgConnection;
use ventas_core::types::DbId;

use super::SALE_COLUMNS;
use crate::models::sale::SaleRow;
use crate::RAW_TABLE;

/// Reads and appends raw sales rows.
pub struct RawSaleRepo;

impl RawSaleRepo {
    /// First id not yet used in the raw table (`1` when the table is empty).
    pub async fn next_id(conn: &mut PgConnection) -> Result<DbId, sqlx::Error> {
        let query = format!("SELECT COALESCE(MAX(id), 0) + 1 FROM {RAW_TABLE}");
        let (next,): (DbId,) = sqlx::query_as(&query).fetch_one(conn).await?;
        Ok(next)
    }

    /// Insert rows one statement at a time. Returns the number inserted.
    ///
    /// Does not commit; pass a transaction to make the batch atomic.
    pub async fn insert_many(
        conn: &mut PgConnection,
        rows: &[SaleRow],
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "INSERT INTO {RAW_TABLE} ({SALE_COLUMNS}) VALUES ($1, $2, $3, $4, $5)"
        );
        let mut inserted = 0;
        for row in rows {
            inserted += sqlx::query(&query)
                .bind(row.id)
                .bind(row.cliente_id)
                .bind(row.producto_id)
                .bind(row.fecha)
                .bind(row.monto)
                .execute(&mut *conn)
                .await?
                .rows_affected();
        }
        Ok(inserted)
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {RAW_TABLE}");
        let (count,): (i64,) = sqlx::query_as(&query).fetch_one(conn).await?;
        Ok(count)
    }

    /// All raw rows ordered by id.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<SaleRow>, sqlx::Error> {
        let query = format!("SELECT {SALE_COLUMNS} FROM {RAW_TABLE} ORDER BY id");
        sqlx::query_as::<_, SaleRow>(&query).fetch_all(conn).await
    }
}
