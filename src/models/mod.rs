pub mod abs_workout;
pub mod exercise;
pub mod from_row;
pub mod pull_up_workout;
pub mod swimming_workout;
pub mod user;
pub mod workout;

pub use abs_workout::AbsWorkout;
pub use exercise::Exercise;
pub use from_row::FromSqliteRow;
pub use pull_up_workout::PullUpWorkout;
pub use swimming_workout::{NewSwimmingWorkout, SwimmingWorkout};
pub use user::User;
pub use workout::{Workout, WorkoutSet, WorkoutSetWithExercise, WorkoutWithSets};
