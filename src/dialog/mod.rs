pub mod input;
pub mod machine;
pub mod menu;
pub mod report;
pub mod state;
pub mod store;

pub use machine::{begin_workout, step, Action, Transition};
pub use menu::MenuAction;
pub use report::Report;
pub use state::DialogState;
pub use store::DialogStore;
