//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut PgConnection` as the first argument. Callers decide the
//! transaction boundary by passing either a bare connection or an open
//! `sqlx::Transaction`.

pub mod clean_sale_repo;
pub mod daily_sales_repo;
pub mod raw_sale_repo;

pub use clean_sale_repo::CleanSaleRepo;
pub use daily_sales_repo::DailySalesRepo;
pub use raw_sale_repo::RawSaleRepo;

/// Column list shared by both sales tables.
pub(crate) const SALE_COLUMNS: &str = "id, cliente_id, producto_id, fecha, monto";
