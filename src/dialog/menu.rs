//! Menu commands.
//!
//! Routing works on [`MenuAction`]; the button labels and slash commands are
//! only the ways a user can spell one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Start,
    AddExercise,
    RecordWorkout,
    Swim,
    PullUps,
    Abs,
    Report,
    Cancel,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::Start,
        MenuAction::AddExercise,
        MenuAction::RecordWorkout,
        MenuAction::Swim,
        MenuAction::PullUps,
        MenuAction::Abs,
        MenuAction::Report,
        MenuAction::Cancel,
    ];

    /// Button text on the reply keyboard. `Start` has no button.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            MenuAction::Start => None,
            MenuAction::AddExercise => Some("➕ Add exercise"),
            MenuAction::RecordWorkout => Some("🏋️ Record workout"),
            MenuAction::Swim => Some("🏊 Swimming"),
            MenuAction::PullUps => Some("💪 Pull-ups"),
            MenuAction::Abs => Some("🤸 Abs"),
            MenuAction::Report => Some("📊 Report"),
            MenuAction::Cancel => Some("❌ Cancel"),
        }
    }

    pub fn command(&self) -> &'static str {
        match self {
            MenuAction::Start => "/start",
            MenuAction::AddExercise => "/add_exercise",
            MenuAction::RecordWorkout => "/record_workout",
            MenuAction::Swim => "/swim",
            MenuAction::PullUps => "/pullups",
            MenuAction::Abs => "/abs",
            MenuAction::Report => "/report",
            MenuAction::Cancel => "/cancel",
        }
    }

    /// Exact match against a label or a command. Commands may carry a
    /// `@botname` suffix as Telegram sends them in groups.
    pub fn from_text(text: &str) -> Option<Self> {
        let text = text.trim();
        let command = text.split_once('@').map_or(text, |(cmd, _)| cmd);
        Self::ALL.into_iter().find(|action| {
            action.label() == Some(text) || (command.starts_with('/') && action.command() == command)
        })
    }
}

/// Rows of the main reply keyboard.
pub fn keyboard_rows() -> Vec<Vec<&'static str>> {
    use MenuAction::*;
    [
        vec![AddExercise, RecordWorkout],
        vec![Swim, PullUps, Abs],
        vec![Report, Cancel],
    ]
    .into_iter()
    .map(|row| row.iter().filter_map(|a| a.label()).collect())
    .collect()
}
