use chrono::{DateTime, Utc};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{AbsWorkout, FromSqliteRow};

#[derive(Clone)]
pub struct AbsWorkoutRepository {
    pool: DbPool,
}

impl AbsWorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, performed_at: DateTime<Utc>) -> Result<AbsWorkout> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO abs_workouts (user_id, performed_at) VALUES (?, ?)",
                rusqlite::params![user_id, performed_at],
            )?;
            Ok(AbsWorkout {
                id: conn.last_insert_rowid(),
                user_id,
                performed_at,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<AbsWorkout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM abs_workouts WHERE user_id = ? ORDER BY performed_at, id")?;
            let records = stmt
                .query_map([user_id], AbsWorkout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
