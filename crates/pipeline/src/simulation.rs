//! Synthetic raw sales for exercising the incremental path.
//!
//! Rows are a pure function of `(first_id, day, count)`, so two runs against
//! tables in the same state insert identical data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Connection, PgConnection};
use ventas_core::types::DbId;
use ventas_db::models::sale::SaleRow;
use ventas_db::repositories::RawSaleRepo;

/// Customer and product references cycle with this period.
const REFERENCE_CYCLE: usize = 5;

const FIRST_CUSTOMER_ID: i32 = 1;
const FIRST_PRODUCT_ID: i32 = 100;

/// 10.00, in cents.
const BASE_AMOUNT_CENTS: i64 = 1_000;
/// 5.50, in cents.
const AMOUNT_STEP_CENTS: i64 = 550;

/// Build `count` rows dated `day` with consecutive ids starting at `first_id`.
pub fn synthetic_rows(first_id: DbId, day: NaiveDate, count: usize) -> Vec<SaleRow> {
    (0..count)
        .map(|i| {
            let cycle = (i % REFERENCE_CYCLE) as i32;
            SaleRow {
                id: first_id + i as DbId,
                cliente_id: FIRST_CUSTOMER_ID + cycle,
                producto_id: FIRST_PRODUCT_ID + cycle,
                fecha: day,
                monto: Decimal::new(BASE_AMOUNT_CENTS + i as i64 * AMOUNT_STEP_CENTS, 2),
            }
        })
        .collect()
}

/// Append `count` synthetic rows for `day` to the raw table and commit.
///
/// Ids continue from the current maximum, read inside the same
/// transaction as the insert.
pub async fn simulate_day(
    conn: &mut PgConnection,
    day: NaiveDate,
    count: usize,
) -> Result<Vec<SaleRow>, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let first_id = RawSaleRepo::next_id(&mut tx).await?;
    let rows = synthetic_rows(first_id, day, count);
    RawSaleRepo::insert_many(&mut tx, &rows).await?;
    tx.commit().await?;

    tracing::info!(%day, rows = count, first_id, "Simulated raw sales loaded");
    Ok(rows)
}
