use chrono::{DateTime, Utc};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, PullUpWorkout};

#[derive(Clone)]
pub struct PullUpWorkoutRepository {
    pool: DbPool,
}

impl PullUpWorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        total_pull_ups: u32,
        max_pull_ups_in_set: u32,
        performed_at: DateTime<Utc>,
    ) -> Result<PullUpWorkout> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO pull_up_workouts
                 (user_id, total_pull_ups, max_pull_ups_in_set, performed_at)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![user_id, total_pull_ups, max_pull_ups_in_set, performed_at],
            )?;
            Ok(PullUpWorkout {
                id: conn.last_insert_rowid(),
                user_id,
                total_pull_ups,
                max_pull_ups_in_set,
                performed_at,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<PullUpWorkout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM pull_up_workouts WHERE user_id = ? ORDER BY performed_at, id",
            )?;
            let records = stmt
                .query_map([user_id], PullUpWorkout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(records)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
