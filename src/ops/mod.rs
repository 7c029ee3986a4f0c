pub mod confirm;
pub mod task_list;

pub use confirm::{Confirm, ConfirmPrompt, Decision, Outcome, PendingAction};
pub use task_list::{EditSession, TaskList};
