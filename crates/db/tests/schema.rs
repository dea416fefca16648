//! Integration tests for the idempotent sales-table DDL.

use sqlx::pool::PoolConnection;
use sqlx::Postgres;
use ventas_db::schema::ensure_tables;
use ventas_db::{CLEAN_TABLE, RAW_TABLE};

/// Running the DDL twice is a no-op the second time.
#[sqlx::test]
async fn test_ensure_tables_is_idempotent(mut conn: PoolConnection<Postgres>) {
    ensure_tables(&mut conn).await.unwrap();
    ensure_tables(&mut conn).await.unwrap();

    for table in [RAW_TABLE, CLEAN_TABLE] {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS ( \
                 SELECT 1 FROM information_schema.tables \
                 WHERE table_schema = current_schema() AND table_name::text = $1 \
             )",
        )
        .bind(table)
        .fetch_one(&mut *conn)
        .await
        .unwrap();
        assert!(exists, "{table} should exist");
    }
}

/// Existing rows survive a second schema ensure.
#[sqlx::test]
async fn test_ensure_tables_keeps_existing_rows(mut conn: PoolConnection<Postgres>) {
    ensure_tables(&mut conn).await.unwrap();
    sqlx::query(
        "INSERT INTO ventas_crudas (id, cliente_id, producto_id, fecha, monto) \
         VALUES (1, 1, 100, DATE '2024-01-01', 10.00)",
    )
    .execute(&mut *conn)
    .await
    .unwrap();

    ensure_tables(&mut conn).await.unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ventas_crudas")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Both tables share the same five columns, in order, with `id` as key.
#[sqlx::test]
async fn test_tables_have_sales_shape(mut conn: PoolConnection<Postgres>) {
    ensure_tables(&mut conn).await.unwrap();

    let expected = [
        ("id", "bigint"),
        ("cliente_id", "integer"),
        ("producto_id", "integer"),
        ("fecha", "date"),
        ("monto", "numeric"),
    ];

    for table in [RAW_TABLE, CLEAN_TABLE] {
        let columns: Vec<(String, String)> = sqlx::query_as(
            "SELECT column_name::text, data_type::text \
             FROM information_schema.columns \
             WHERE table_schema = current_schema() AND table_name::text = $1 \
             ORDER BY ordinal_position",
        )
        .bind(table)
        .fetch_all(&mut *conn)
        .await
        .unwrap();

        let columns: Vec<(&str, &str)> = columns
            .iter()
            .map(|(name, ty)| (name.as_str(), ty.as_str()))
            .collect();
        assert_eq!(columns, expected, "{table} has unexpected columns");

        let (pk_column,): (String,) = sqlx::query_as(
            "SELECT kcu.column_name::text \
             FROM information_schema.table_constraints tc \
             JOIN information_schema.key_column_usage kcu \
               ON tc.constraint_name = kcu.constraint_name \
              AND tc.table_schema = kcu.table_schema \
             WHERE tc.constraint_type = 'PRIMARY KEY' \
               AND tc.table_schema = current_schema() \
               AND tc.table_name::text = $1",
        )
        .bind(table)
        .fetch_one(&mut *conn)
        .await
        .unwrap();
        assert_eq!(pk_column, "id");
    }
}
