use chrono::{DateTime, Utc};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, Workout, WorkoutSet, WorkoutSetWithExercise, WorkoutWithSets};
use crate::parser::PlannedSet;

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, performed_at: DateTime<Utc>) -> Result<Workout> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workouts (user_id, performed_at) VALUES (?, ?)",
                rusqlite::params![user_id, performed_at],
            )?;
            Ok(Workout {
                id: conn.last_insert_rowid(),
                user_id,
                performed_at,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn add_set(
        &self,
        workout_id: i64,
        exercise_id: i64,
        reps: u32,
        weight: Option<f64>,
        set_index: u32,
    ) -> Result<WorkoutSet> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workout_sets (workout_id, exercise_id, reps, weight, set_index)
                 VALUES (?, ?, ?, ?, ?)",
                rusqlite::params![workout_id, exercise_id, reps, weight, set_index],
            )?;
            Ok(WorkoutSet {
                id: conn.last_insert_rowid(),
                workout_id,
                exercise_id,
                reps,
                weight,
                set_index,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Inserts the sets one by one. There is no surrounding transaction: if an
    /// insert fails, the sets before it stay.
    pub async fn add_sets(
        &self,
        workout_id: i64,
        exercise_id: i64,
        sets: &[PlannedSet],
    ) -> Result<Vec<WorkoutSet>> {
        let mut stored = Vec::with_capacity(sets.len());
        for set in sets {
            stored.push(
                self.add_set(workout_id, exercise_id, set.reps, set.weight, set.set_index)
                    .await?,
            );
        }
        Ok(stored)
    }

    /// Workouts of a user, oldest first, optionally bounded by time.
    pub async fn find_by_user(
        &self,
        user_id: i64,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<WorkoutWithSets>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM workouts
                 WHERE user_id = ?1
                   AND (?2 IS NULL OR performed_at >= ?2)
                   AND (?3 IS NULL OR performed_at <= ?3)
                 ORDER BY performed_at, id",
            )?;
            let workouts = stmt
                .query_map(rusqlite::params![user_id, from, to], Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            let mut sets_stmt = conn.prepare(
                "SELECT s.*, e.name AS exercise_name
                 FROM workout_sets s
                 JOIN exercises e ON e.id = s.exercise_id
                 WHERE s.workout_id = ?
                 ORDER BY s.set_index",
            )?;

            let mut result = Vec::with_capacity(workouts.len());
            for workout in workouts {
                let sets = sets_stmt
                    .query_map([workout.id], WorkoutSetWithExercise::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                result.push(WorkoutWithSets { workout, sets });
            }
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
