//! Repository for the `ventas_limpias` table.
//!
//! Rows only ever arrive here by copying from `ventas_crudas`, either
//! everything (full refresh) or everything dated after the watermark.

use chrono::NaiveDate;
use sqlx::PgConnection;
use ventas_core::types::watermark_sentinel;

use super::SALE_COLUMNS;
use crate::models::sale::SaleRow;
use crate::{CLEAN_TABLE, RAW_TABLE};

/// Copy and inspection queries for clean sales rows.
pub struct CleanSaleRepo;

impl CleanSaleRepo {
    /// Latest `fecha` already present in the clean table, or the epoch
    /// sentinel when the table is empty.
    pub async fn watermark(conn: &mut PgConnection) -> Result<NaiveDate, sqlx::Error> {
        let query = format!("SELECT COALESCE(MAX(fecha), $1) FROM {CLEAN_TABLE}");
        let (watermark,): (NaiveDate,) = sqlx::query_as(&query)
            .bind(watermark_sentinel())
            .fetch_one(conn)
            .await?;
        Ok(watermark)
    }

    /// Copy every raw row dated strictly after `watermark`.
    ///
    /// Raw rows dated on the watermark itself are never picked up, even if
    /// they arrived after the previous copy.
    pub async fn copy_newer_than(
        conn: &mut PgConnection,
        watermark: NaiveDate,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "INSERT INTO {CLEAN_TABLE} ({SALE_COLUMNS}) \
             SELECT {SALE_COLUMNS} FROM {RAW_TABLE} \
             WHERE fecha > $1"
        );
        let result = sqlx::query(&query).bind(watermark).execute(conn).await?;
        Ok(result.rows_affected())
    }

    /// Copy every raw row unconditionally.
    pub async fn copy_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let query = format!(
            "INSERT INTO {CLEAN_TABLE} ({SALE_COLUMNS}) \
             SELECT {SALE_COLUMNS} FROM {RAW_TABLE}"
        );
        let result = sqlx::query(&query).execute(conn).await?;
        Ok(result.rows_affected())
    }

    /// Remove every clean row. Returns the number removed.
    pub async fn delete_all(conn: &mut PgConnection) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {CLEAN_TABLE}");
        let result = sqlx::query(&query).execute(conn).await?;
        Ok(result.rows_affected())
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {CLEAN_TABLE}");
        let (count,): (i64,) = sqlx::query_as(&query).fetch_one(conn).await?;
        Ok(count)
    }

    /// Earliest and latest `fecha` in the clean table (`None` when empty).
    pub async fn date_range(
        conn: &mut PgConnection,
    ) -> Result<(Option<NaiveDate>, Option<NaiveDate>), sqlx::Error> {
        let query = format!("SELECT MIN(fecha), MAX(fecha) FROM {CLEAN_TABLE}");
        sqlx::query_as(&query).fetch_one(conn).await
    }

    /// All clean rows ordered by id.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<SaleRow>, sqlx::Error> {
        let query = format!("SELECT {SALE_COLUMNS} FROM {CLEAN_TABLE} ORDER BY id");
        sqlx::query_as::<_, SaleRow>(&query).fetch_all(conn).await
    }
}
