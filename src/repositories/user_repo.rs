use chrono::Utc;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Returns the user for a Telegram id, creating the row on first contact.
    pub async fn get_or_create_by_telegram_id(&self, telegram_id: i64) -> Result<User> {
        let pool = self.pool.clone();
        let now = Utc::now();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let inserted = conn.execute(
                "INSERT INTO users (telegram_id, created_at) VALUES (?, ?)
                 ON CONFLICT(telegram_id) DO NOTHING",
                rusqlite::params![telegram_id, now],
            )?;
            if inserted > 0 {
                tracing::info!(telegram_id, "Created user");
            }
            let user = conn.query_row(
                "SELECT * FROM users WHERE telegram_id = ?",
                [telegram_id],
                User::from_row,
            )?;
            Ok(user)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
