/// Where a user currently is in a multi-step flow. Each variant carries only
/// the fields already validated for that flow. Idle is the absence of state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    AddExercise,
    /// Ids in the order they were listed to the user.
    SelectExercise { exercise_ids: Vec<i64> },
    EnterSets { exercise_id: i64 },
    SwimDistance,
    SwimTotalTime { distance: u32 },
    SwimPaddles { distance: u32, total_time: u32 },
    SwimBest50 {
        distance: u32,
        total_time: u32,
        paddles_distance: Option<u32>,
    },
    PullUpTotal,
    PullUpMax { total: u32 },
}

impl DialogState {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            DialogState::AddExercise => "add_exercise",
            DialogState::SelectExercise { .. } => "select_exercise",
            DialogState::EnterSets { .. } => "enter_sets",
            DialogState::SwimDistance => "swim_distance",
            DialogState::SwimTotalTime { .. } => "swim_total_time",
            DialogState::SwimPaddles { .. } => "swim_paddles",
            DialogState::SwimBest50 { .. } => "swim_best_50",
            DialogState::PullUpTotal => "pull_up_total",
            DialogState::PullUpMax { .. } => "pull_up_max",
        }
    }
}
