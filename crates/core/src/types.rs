use chrono::NaiveDate;

/// Sales row primary keys are PostgreSQL BIGINT.
pub type DbId = i64;

/// Watermark reported when the clean table holds no rows yet.
///
/// Any real sales date compares strictly greater, so the first incremental
/// pass copies everything.
pub fn watermark_sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}
