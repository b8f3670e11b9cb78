use chrono::{DateTime, Utc};
use rusqlite::Row;

use super::FromSqliteRow;

/// A strength session. Sets hang off it via `workout_id`.
#[derive(Debug, Clone)]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub performed_at: DateTime<Utc>,
}

impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            performed_at: row.get("performed_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WorkoutSet {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub reps: u32,
    pub weight: Option<f64>,
    /// 1-based, unique within the workout.
    pub set_index: u32,
}

impl FromSqliteRow for WorkoutSet {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            exercise_id: row.get("exercise_id")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            set_index: row.get("set_index")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WorkoutSetWithExercise {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub exercise_name: String,
    pub reps: u32,
    pub weight: Option<f64>,
    pub set_index: u32,
}

impl FromSqliteRow for WorkoutSetWithExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            exercise_id: row.get("exercise_id")?,
            exercise_name: row.get("exercise_name")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            set_index: row.get("set_index")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WorkoutWithSets {
    pub workout: Workout,
    pub sets: Vec<WorkoutSetWithExercise>,
}
