//! The dialog state machine.
//!
//! [`step`] is pure: it takes the user's current state and the incoming text
//! and returns the next state plus the [`Action`] the chat handler has to
//! carry out. Anything that needs storage is expressed as an action.

use super::input::{self, InputError};
use super::menu::MenuAction;
use super::DialogState;
use crate::models::exercise::MAX_NAME_LEN;
use crate::models::{Exercise, NewSwimmingWorkout};
use crate::parser::{self, PlannedSet};

pub const GREETING: &str =
    "Hi! I'll help you keep track of your training. Pick an action from the menu.";
pub const ASK_EXERCISE_NAME: &str = "Send the exercise name:";
pub const ASK_EXERCISE_CHOICE: &str = "Send the number of the exercise:";
pub const ASK_SETS: &str = "Send your sets (for example: 12x3@50, 15x2)";
pub const ASK_SWIM_DISTANCE: &str = "How many metres did you swim?";
pub const ASK_SWIM_TIME: &str = "Total time? Send seconds or a time like 42:30.";
pub const ASK_SWIM_PADDLES: &str = "How many metres with paddles? Send 0 if none.";
pub const ASK_SWIM_BEST_50: &str = "Best 50 m time? Send seconds, or 0 to skip.";
pub const ASK_PULL_UP_TOTAL: &str = "How many pull-ups did you do in total?";
pub const ASK_PULL_UP_MAX: &str = "What was the most in a single set?";
pub const NO_EXERCISES: &str = "Add an exercise from the menu first.";
pub const CANCELLED: &str = "Cancelled.";
pub const NOTHING_TO_CANCEL: &str = "Nothing to cancel.";

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Free text outside of any flow; no reply.
    Ignore,
    Reply(String),
    CreateExercise { name: String },
    /// Look up the user's exercises and continue with [`begin_workout`].
    ListExercises,
    SaveWorkout {
        exercise_id: i64,
        sets: Vec<PlannedSet>,
    },
    SaveSwim(NewSwimmingWorkout),
    SavePullUps { total: u32, max_in_set: u32 },
    SaveAbs,
    Report,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: Option<DialogState>,
    pub action: Action,
}

impl Transition {
    fn to(next: DialogState, prompt: &str) -> Self {
        Self {
            next: Some(next),
            action: Action::Reply(prompt.to_string()),
        }
    }

    fn done(action: Action) -> Self {
        Self { next: None, action }
    }

    /// Stay on the same field and ask again.
    fn retry(state: &DialogState, error: InputError, prompt: &str) -> Self {
        Self {
            next: Some(state.clone()),
            action: Action::Reply(format!("{}\n{}", error, prompt)),
        }
    }
}

pub fn step(state: Option<&DialogState>, text: &str) -> Transition {
    if let Some(action) = MenuAction::from_text(text) {
        return on_menu(action, state);
    }

    match state {
        None => Transition::done(Action::Ignore),
        Some(state) => on_input(state, text),
    }
}

fn on_menu(action: MenuAction, state: Option<&DialogState>) -> Transition {
    match action {
        MenuAction::Start => Transition::done(Action::Reply(GREETING.to_string())),
        MenuAction::AddExercise => Transition::to(DialogState::AddExercise, ASK_EXERCISE_NAME),
        MenuAction::RecordWorkout => Transition::done(Action::ListExercises),
        MenuAction::Swim => Transition::to(DialogState::SwimDistance, ASK_SWIM_DISTANCE),
        MenuAction::PullUps => Transition::to(DialogState::PullUpTotal, ASK_PULL_UP_TOTAL),
        MenuAction::Abs => Transition::done(Action::SaveAbs),
        MenuAction::Report => Transition::done(Action::Report),
        MenuAction::Cancel => {
            let reply = if state.is_some() {
                CANCELLED
            } else {
                NOTHING_TO_CANCEL
            };
            Transition::done(Action::Reply(reply.to_string()))
        }
    }
}

fn on_input(state: &DialogState, text: &str) -> Transition {
    match state {
        DialogState::AddExercise => match input::exercise_name(text, MAX_NAME_LEN) {
            Ok(name) => Transition::done(Action::CreateExercise { name }),
            Err(e) => Transition::retry(state, e, ASK_EXERCISE_NAME),
        },
        DialogState::SelectExercise { exercise_ids } => {
            match input::choice(text, exercise_ids.len()) {
                Ok(i) => Transition::to(
                    DialogState::EnterSets {
                        exercise_id: exercise_ids[i],
                    },
                    ASK_SETS,
                ),
                Err(e) => Transition::retry(state, e, ASK_EXERCISE_CHOICE),
            }
        }
        DialogState::EnterSets { exercise_id } => {
            let notations = parser::parse_sets(text);
            if notations.is_empty() {
                return Transition::retry(state, InputError::NoSets, ASK_SETS);
            }
            let max = parser::MAX_SETS_PER_BATCH;
            if parser::total_sets(&notations) > u64::from(max) {
                return Transition::retry(state, InputError::TooManySets { max }, ASK_SETS);
            }
            let sets = parser::expand(&notations);
            Transition::done(Action::SaveWorkout {
                exercise_id: *exercise_id,
                sets,
            })
        }
        DialogState::SwimDistance => match input::positive(text) {
            Ok(distance) => Transition::to(DialogState::SwimTotalTime { distance }, ASK_SWIM_TIME),
            Err(e) => Transition::retry(state, e, ASK_SWIM_DISTANCE),
        },
        DialogState::SwimTotalTime { distance } => match input::duration(text) {
            Ok(total_time) => Transition::to(
                DialogState::SwimPaddles {
                    distance: *distance,
                    total_time,
                },
                ASK_SWIM_PADDLES,
            ),
            Err(e) => Transition::retry(state, e, ASK_SWIM_TIME),
        },
        DialogState::SwimPaddles {
            distance,
            total_time,
        } => match input::optional(text).and_then(|v| input::at_most(v, *distance)) {
            Ok(paddles_distance) => Transition::to(
                DialogState::SwimBest50 {
                    distance: *distance,
                    total_time: *total_time,
                    paddles_distance,
                },
                ASK_SWIM_BEST_50,
            ),
            Err(e) => Transition::retry(state, e, ASK_SWIM_PADDLES),
        },
        DialogState::SwimBest50 {
            distance,
            total_time,
            paddles_distance,
        } => match input::optional_duration(text, *total_time) {
            Ok(best_50m_time) => Transition::done(Action::SaveSwim(NewSwimmingWorkout {
                distance: *distance,
                total_time: *total_time,
                paddles_distance: *paddles_distance,
                best_50m_time,
            })),
            Err(e) => Transition::retry(state, e, ASK_SWIM_BEST_50),
        },
        DialogState::PullUpTotal => match input::positive(text) {
            Ok(total) => Transition::to(DialogState::PullUpMax { total }, ASK_PULL_UP_MAX),
            Err(e) => Transition::retry(state, e, ASK_PULL_UP_TOTAL),
        },
        DialogState::PullUpMax { total } => match input::positive(text) {
            Ok(max_in_set) if max_in_set > *total => {
                Transition::retry(state, InputError::TooLarge { limit: *total }, ASK_PULL_UP_MAX)
            }
            Ok(max_in_set) => Transition::done(Action::SavePullUps {
                total: *total,
                max_in_set,
            }),
            Err(e) => Transition::retry(state, e, ASK_PULL_UP_MAX),
        },
    }
}

/// Continues [`Action::ListExercises`] once the user's exercises are known.
pub fn begin_workout(exercises: &[Exercise]) -> Transition {
    if exercises.is_empty() {
        return Transition::done(Action::Reply(NO_EXERCISES.to_string()));
    }

    let list = exercises
        .iter()
        .enumerate()
        .map(|(i, ex)| format!("{}. {}", i + 1, ex.name))
        .collect::<Vec<_>>()
        .join("\n");

    Transition {
        next: Some(DialogState::SelectExercise {
            exercise_ids: exercises.iter().map(|ex| ex.id).collect(),
        }),
        action: Action::Reply(format!("Pick an exercise:\n{}\n{}", list, ASK_EXERCISE_CHOICE)),
    }
}
