use chrono::{DateTime, Utc};
use rusqlite::Row;

use super::FromSqliteRow;

#[derive(Debug, Clone)]
pub struct SwimmingWorkout {
    pub id: i64,
    pub user_id: i64,
    /// Metres.
    pub distance: u32,
    /// Seconds.
    pub total_time: u32,
    pub paddles_distance: Option<u32>,
    pub best_50m_time: Option<u32>,
    pub performed_at: DateTime<Utc>,
}

impl SwimmingWorkout {
    /// Total time as `HH:MM:SS`.
    pub fn formatted_total_time(&self) -> String {
        format_seconds(self.total_time)
    }
}

pub fn format_seconds(total: u32) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

impl FromSqliteRow for SwimmingWorkout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            distance: row.get("distance")?,
            total_time: row.get("total_time")?,
            paddles_distance: row.get("paddles_distance")?,
            best_50m_time: row.get("best_50m_time")?,
            performed_at: row.get("performed_at")?,
        })
    }
}

/// Validated swim fields collected by the dialog, ready to be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSwimmingWorkout {
    pub distance: u32,
    pub total_time: u32,
    pub paddles_distance: Option<u32>,
    pub best_50m_time: Option<u32>,
}
