use chrono::{DateTime, Utc};
use rusqlite::Row;

use super::FromSqliteRow;

/// One completed abs session; the row itself is the record.
#[derive(Debug, Clone)]
pub struct AbsWorkout {
    pub id: i64,
    pub user_id: i64,
    pub performed_at: DateTime<Utc>,
}

impl FromSqliteRow for AbsWorkout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            performed_at: row.get("performed_at")?,
        })
    }
}
