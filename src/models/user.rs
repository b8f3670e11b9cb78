use chrono::{DateTime, Utc};
use rusqlite::Row;

use super::FromSqliteRow;

/// A chat participant, created the first time they store anything.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            telegram_id: row.get("telegram_id")?,
            created_at: row.get("created_at")?,
        })
    }
}
