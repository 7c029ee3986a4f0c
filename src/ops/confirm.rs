use crate::model::{Bucket, TaskId};

/// Answer from the confirmation collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

/// What the user is asked before a destructive operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: String,
    /// Label of the destructive button ("Delete", "Clear")
    pub confirm_label: &'static str,
}

/// A destructive operation waiting for a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteTask { id: TaskId },
    ClearBucket { bucket: Bucket },
}

impl PendingAction {
    pub fn prompt(&self) -> ConfirmPrompt {
        match self {
            PendingAction::DeleteTask { .. } => ConfirmPrompt {
                title: "Delete Task",
                message: "Are you sure you want to delete this task?".to_string(),
                confirm_label: "Delete",
            },
            PendingAction::ClearBucket { bucket } => ConfirmPrompt {
                title: "Clear Tasks",
                message: format!("Are you sure you want to clear all {} tasks?", bucket),
                confirm_label: "Clear",
            },
        }
    }
}

/// Result of a destructive operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Confirmed; this many tasks were removed
    Removed(usize),
    Cancelled,
    /// The target task no longer exists
    NotFound,
}

/// Confirmation collaborator used by `delete_task` and `clear_bucket`
pub trait Confirm {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision;
}

/// A pre-made answer, for callers that already asked
impl Confirm for Decision {
    fn confirm(&mut self, _prompt: &ConfirmPrompt) -> Decision {
        *self
    }
}

impl<F> Confirm for F
where
    F: FnMut(&ConfirmPrompt) -> Decision,
{
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision {
        self(prompt)
    }
}
