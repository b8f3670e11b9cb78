use std::sync::Arc;

use chrono::Utc;

use crate::dialog::{self, Action, DialogState, DialogStore, Report};
use crate::error::Result;
use crate::messenger::{IncomingMessage, Messenger, Reply};
use crate::models::swimming_workout::format_seconds;
use crate::models::User;
use crate::repositories::{
    AbsWorkoutRepository, ExerciseRepository, PullUpWorkoutRepository, SwimmingWorkoutRepository,
    UserRepository, WorkoutRepository,
};

#[derive(Clone)]
pub struct ChatState {
    pub dialogs: Arc<DialogStore>,
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
    pub workout_repo: WorkoutRepository,
    pub swimming_repo: SwimmingWorkoutRepository,
    pub pull_up_repo: PullUpWorkoutRepository,
    pub abs_repo: AbsWorkoutRepository,
}

impl ChatState {
    async fn user(&self, telegram_id: i64) -> Result<User> {
        self.user_repo.get_or_create_by_telegram_id(telegram_id).await
    }

    async fn report(&self, user_id: i64) -> Result<Report> {
        Ok(Report {
            workouts: self.workout_repo.find_by_user(user_id, None, None).await?,
            swims: self.swimming_repo.find_by_user(user_id).await?,
            pull_ups: self.pull_up_repo.find_by_user(user_id).await?,
            abs: self.abs_repo.find_by_user(user_id).await?,
        })
    }
}

/// Runs one incoming message through the dialog.
///
/// The stored state is only replaced once the action's storage work succeeded,
/// so a storage failure leaves the user where they were. The reply is sent
/// last.
pub async fn handle_message(
    state: &ChatState,
    messenger: &dyn Messenger,
    msg: IncomingMessage,
) -> Result<()> {
    let user_id = msg.user_id;
    let current = state.dialogs.get(user_id);
    let transition = dialog::step(current.as_ref(), &msg.text);

    tracing::debug!(
        user_id,
        state = current.as_ref().map(DialogState::name),
        next = transition.next.as_ref().map(DialogState::name),
        "Dialog step"
    );

    let mut next = transition.next;
    let reply = match transition.action {
        Action::Ignore => None,
        Action::Reply(text) => Some(text),
        Action::CreateExercise { name } => {
            let user = state.user(user_id).await?;
            let exercise = state.exercise_repo.create(user.id, &name).await?;
            tracing::info!(user_id, exercise_id = exercise.id, "Exercise added");
            Some(format!("Exercise '{}' added!", exercise.name))
        }
        Action::ListExercises => {
            let user = state.user(user_id).await?;
            let exercises = state.exercise_repo.find_by_user(user.id).await?;
            let started = dialog::begin_workout(&exercises);
            next = started.next;
            match started.action {
                Action::Reply(text) => Some(text),
                _ => None,
            }
        }
        Action::SaveWorkout { exercise_id, sets } => {
            let user = state.user(user_id).await?;
            let workout = state.workout_repo.create(user.id, Utc::now()).await?;
            let stored = state
                .workout_repo
                .add_sets(workout.id, exercise_id, &sets)
                .await?;
            tracing::info!(user_id, workout_id = workout.id, sets = stored.len(), "Workout recorded");
            Some(format!("Workout recorded: {} sets.", stored.len()))
        }
        Action::SaveSwim(swim) => {
            let user = state.user(user_id).await?;
            let record = state
                .swimming_repo
                .create(user.id, swim, Utc::now())
                .await?;
            tracing::info!(user_id, swim_id = record.id, "Swim recorded");
            Some(format!(
                "Swim saved: {} m in {}.",
                record.distance,
                format_seconds(record.total_time)
            ))
        }
        Action::SavePullUps { total, max_in_set } => {
            let user = state.user(user_id).await?;
            let record = state
                .pull_up_repo
                .create(user.id, total, max_in_set, Utc::now())
                .await?;
            tracing::info!(user_id, pull_up_id = record.id, "Pull-ups recorded");
            Some(format!(
                "Pull-ups saved: {} total, best set {}.",
                record.total_pull_ups, record.max_pull_ups_in_set
            ))
        }
        Action::SaveAbs => {
            let user = state.user(user_id).await?;
            let record = state.abs_repo.create(user.id, Utc::now()).await?;
            tracing::info!(user_id, abs_id = record.id, "Abs session recorded");
            Some("Abs session recorded!".to_string())
        }
        Action::Report => {
            let user = state.user(user_id).await?;
            let report = state.report(user.id).await?;
            tracing::info!(user_id, "Report generated");
            Some(report.render())
        }
    };

    state.dialogs.replace(user_id, next);
    if let Some(text) = reply {
        messenger.send(msg.chat_id, Reply::with_menu(text)).await?;
    }

    Ok(())
}
