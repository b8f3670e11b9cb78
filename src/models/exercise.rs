use rusqlite::Row;

use super::FromSqliteRow;

/// Longest exercise name accepted from the chat.
pub const MAX_NAME_LEN: usize = 100;

#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            name: row.get("name")?,
        })
    }
}
