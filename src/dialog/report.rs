//! Text report over everything a user has logged.

use chrono::{DateTime, Utc};

use crate::models::swimming_workout::format_seconds;
use crate::models::{AbsWorkout, PullUpWorkout, SwimmingWorkout, WorkoutWithSets};

const NO_RECORDS: &str = "No records yet.";

/// All records of one user, grouped by category.
#[derive(Debug, Default)]
pub struct Report {
    pub workouts: Vec<WorkoutWithSets>,
    pub swims: Vec<SwimmingWorkout>,
    pub pull_ups: Vec<PullUpWorkout>,
    pub abs: Vec<AbsWorkout>,
}

fn minute(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

fn weight(w: Option<f64>) -> String {
    w.map(|w| format!(" @ {}", w)).unwrap_or_default()
}

fn section<T>(title: &str, items: &[T], render: impl Fn(&T) -> String) -> String {
    let body = if items.is_empty() {
        NO_RECORDS.to_string()
    } else {
        items.iter().map(render).collect::<Vec<_>>().join("\n\n")
    };
    format!("{}\n{}", title, body)
}

fn render_workout(w: &WorkoutWithSets) -> String {
    let mut lines = vec![minute(&w.workout.performed_at)];
    if w.sets.is_empty() {
        lines.push("  (no sets)".to_string());
    }
    for set in &w.sets {
        lines.push(format!(
            "  {}. {}: {} reps{}",
            set.set_index,
            set.exercise_name,
            set.reps,
            weight(set.weight)
        ));
    }
    lines.join("\n")
}

fn render_swim(s: &SwimmingWorkout) -> String {
    let mut lines = vec![
        minute(&s.performed_at),
        format!("  Distance: {} m", s.distance),
        format!("  Time: {}", s.formatted_total_time()),
    ];
    if let Some(paddles) = s.paddles_distance {
        lines.push(format!("  With paddles: {} m", paddles));
    }
    if let Some(best) = s.best_50m_time {
        lines.push(format!("  Best 50 m: {}", format_seconds(best)));
    }
    lines.join("\n")
}

fn render_pull_ups(p: &PullUpWorkout) -> String {
    format!(
        "{}\n  Total: {}\n  Best set: {}",
        minute(&p.performed_at),
        p.total_pull_ups,
        p.max_pull_ups_in_set
    )
}

fn render_abs(abs: &[AbsWorkout]) -> String {
    if abs.is_empty() {
        return format!("🤸 Abs\n{}", NO_RECORDS);
    }
    let dates = abs
        .iter()
        .map(|a| format!("  {}", minute(&a.performed_at)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("🤸 Abs\nSessions: {}\n{}", abs.len(), dates)
}

impl Report {
    pub fn render(&self) -> String {
        [
            section("🏋️ Workouts", &self.workouts, render_workout),
            section("🏊 Swimming", &self.swims, render_swim),
            section("💪 Pull-ups", &self.pull_ups, render_pull_ups),
            render_abs(&self.abs),
        ]
        .join("\n\n")
    }
}
