//! Integration tests for the stored-procedure trigger.
//!
//! The procedures are owned by the database; these tests install simple
//! stand-ins from the workspace `fixtures/daily_sales_procedures.sql`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use ventas_core::load_mode::LoadMode;
use ventas_db::models::sale::SaleRow;
use ventas_db::repositories::{DailySalesRepo, RawSaleRepo};
use ventas_db::schema::ensure_tables;

const PROCEDURES: &str = include_str!("../../../fixtures/daily_sales_procedures.sql");

fn sale(id: i64, day: u32) -> SaleRow {
    SaleRow {
        id,
        cliente_id: 1,
        producto_id: 100,
        fecha: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        monto: Decimal::new(1000, 2),
    }
}

async fn install(conn: &mut PoolConnection<Postgres>) {
    ensure_tables(conn).await.unwrap();
    sqlx::raw_sql(PROCEDURES).execute(&mut **conn).await.unwrap();
}

#[sqlx::test]
async fn test_full_procedure_then_count_on_separate_connection(pool: PgPool) {
    let mut writer = pool.acquire().await.unwrap();
    install(&mut writer).await;
    RawSaleRepo::insert_many(&mut writer, &[sale(1, 1), sale(2, 1), sale(3, 2)])
        .await
        .unwrap();

    DailySalesRepo::call_load_procedure(&mut writer, LoadMode::Full)
        .await
        .unwrap();

    // Auto-commit: a different connection sees the procedure's rows.
    let mut reader = pool.acquire().await.unwrap();
    let count = DailySalesRepo::count_read_only(&mut reader).await.unwrap();
    assert_eq!(count, 2);
}

#[sqlx::test]
async fn test_incremental_procedure_only_adds_new_days(mut conn: PoolConnection<Postgres>) {
    install(&mut conn).await;
    RawSaleRepo::insert_many(&mut conn, &[sale(1, 1)]).await.unwrap();
    DailySalesRepo::call_load_procedure(&mut conn, LoadMode::Incremental)
        .await
        .unwrap();

    RawSaleRepo::insert_many(&mut conn, &[sale(2, 2), sale(3, 3)])
        .await
        .unwrap();
    DailySalesRepo::call_load_procedure(&mut conn, LoadMode::Incremental)
        .await
        .unwrap();

    assert_eq!(DailySalesRepo::count_read_only(&mut conn).await.unwrap(), 3);
}

#[sqlx::test]
async fn test_missing_procedure_propagates_error(mut conn: PoolConnection<Postgres>) {
    ensure_tables(&mut conn).await.unwrap();

    let err = DailySalesRepo::call_load_procedure(&mut conn, LoadMode::Full)
        .await
        .unwrap_err();
    assert!(err.as_database_error().is_some(), "unexpected error: {err}");
}

/// A second full load replaces the table instead of appending to it.
#[sqlx::test]
async fn test_full_procedure_is_repeatable(mut conn: PoolConnection<Postgres>) {
    install(&mut conn).await;
    RawSaleRepo::insert_many(&mut conn, &[sale(1, 1), sale(2, 2)])
        .await
        .unwrap();

    for _ in 0..2 {
        DailySalesRepo::call_load_procedure(&mut conn, LoadMode::Full)
            .await
            .unwrap();
    }

    assert_eq!(DailySalesRepo::count_read_only(&mut conn).await.unwrap(), 2);
}
