//! Sales rows shared by `ventas_crudas` and `ventas_limpias`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use ventas_core::types::DbId;

/// A row from either sales table. Both tables have the same shape.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SaleRow {
    pub id: DbId,
    pub cliente_id: i32,
    pub producto_id: i32,
    pub fecha: NaiveDate,
    /// NUMERIC(12,2)
    pub monto: Decimal,
}

/// Row counts and date span reported at the end of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub raw_rows: i64,
    pub clean_rows: i64,
    /// `None` while the clean table is empty.
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}
