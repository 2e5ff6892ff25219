use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use visitor_counter_domain::VisitRecord;

/// Same layout as SQLite's `datetime('now')`, so text comparison orders
/// correctly against stored timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_cutoff(cutoff: DateTime<Utc>) -> String {
    cutoff.format(TIMESTAMP_FORMAT).to_string()
}

pub fn row_to_visit(row: SqliteRow) -> VisitRecord {
    VisitRecord {
        id: row.get("id"),
        timestamp: row.get("timestamp"),
        client_identifier: row.get("client_identifier"),
    }
}
