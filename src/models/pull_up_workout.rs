use chrono::{DateTime, Utc};
use rusqlite::Row;

use super::FromSqliteRow;

#[derive(Debug, Clone)]
pub struct PullUpWorkout {
    pub id: i64,
    pub user_id: i64,
    pub total_pull_ups: u32,
    /// Never exceeds `total_pull_ups`.
    pub max_pull_ups_in_set: u32,
    pub performed_at: DateTime<Utc>,
}

impl FromSqliteRow for PullUpWorkout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            total_pull_ups: row.get("total_pull_ups")?,
            max_pull_ups_in_set: row.get("max_pull_ups_in_set")?,
            performed_at: row.get("performed_at")?,
        })
    }
}
