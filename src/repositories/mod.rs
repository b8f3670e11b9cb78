pub mod abs_repo;
pub mod exercise_repo;
pub mod pull_up_repo;
pub mod swimming_repo;
pub mod user_repo;
pub mod workout_repo;

pub use abs_repo::AbsWorkoutRepository;
pub use exercise_repo::ExerciseRepository;
pub use pull_up_repo::PullUpWorkoutRepository;
pub use swimming_repo::SwimmingWorkoutRepository;
pub use user_repo::UserRepository;
pub use workout_repo::WorkoutRepository;
