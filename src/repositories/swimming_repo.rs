use chrono::{DateTime, Utc};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, NewSwimmingWorkout, SwimmingWorkout};

#[derive(Clone)]
pub struct SwimmingWorkoutRepository {
    pool: DbPool,
}

impl SwimmingWorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        swim: NewSwimmingWorkout,
        performed_at: DateTime<Utc>,
    ) -> Result<SwimmingWorkout> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO swimming_workouts
                 (user_id, distance, total_time, paddles_distance, best_50m_time, performed_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    user_id,
                    swim.distance,
                    swim.total_time,
                    swim.paddles_distance,
                    swim.best_50m_time,
                    performed_at
                ],
            )?;
            Ok(SwimmingWorkout {
                id: conn.last_insert_rowid(),
                user_id,
                distance: swim.distance,
                total_time: swim.total_time,
                paddles_distance: swim.paddles_distance,
                best_50m_time: swim.best_50m_time,
                performed_at,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<SwimmingWorkout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM swimming_workouts WHERE user_id = ? ORDER BY performed_at, id",
            )?;
            let swims = stmt
                .query_map([user_id], SwimmingWorkout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(swims)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
