use tracing::{debug, info, trace};

use crate::model::{Bucket, DEFAULT_TITLE, Task, TaskId};

use super::confirm::{Confirm, Decision, Outcome, PendingAction};

/// In-progress title edit for one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    /// Uncommitted title text
    pub draft: String,
}

/// The task board: tasks, active filter and the (single) edit session.
///
/// Every operation is synchronous and atomic. Operating on an id that no
/// longer exists is a silent no-op, reported through the return value.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    active_filter: Bucket,
    edit_session: Option<EditSession>,
    next_id: u64,
    default_title: String,
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        TaskList {
            tasks: Vec::new(),
            active_filter: Bucket::Today,
            edit_session: None,
            next_id: 1,
            default_title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Use a different title for new tasks
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    pub fn with_filter(mut self, bucket: Bucket) -> Self {
        self.active_filter = bucket;
        self
    }

    /// Add the sample tasks shown on first launch of the demo board
    pub fn with_demo_tasks(mut self) -> Self {
        self.insert("Complete React Native app", Bucket::Today, false);
        self.insert("Go for a run", Bucket::Today, true);
        self.insert("Buy groceries", Bucket::Tomorrow, false);
        self
    }

    /// Append a task directly, without opening an edit session
    pub fn insert(&mut self, title: impl Into<String>, bucket: Bucket, completed: bool) -> TaskId {
        let id = self.alloc_id();
        let mut task = Task::new(id, title, bucket);
        task.completed = completed;
        self.tasks.push(task);
        id
    }

    fn alloc_id(&mut self) -> TaskId {
        let id = TaskId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn active_filter(&self) -> Bucket {
        self.active_filter
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit_session.as_ref()
    }

    pub fn default_title(&self) -> &str {
        &self.default_title
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Tasks in the active bucket, in insertion order
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        let filter = self.active_filter;
        self.tasks.iter().filter(move |t| t.bucket() == filter)
    }

    pub fn visible_ids(&self) -> Vec<TaskId> {
        self.visible_tasks().map(Task::id).collect()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit_session.as_ref().is_some_and(|s| s.task_id == id)
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        self.tasks.iter().filter(|t| t.bucket() == bucket).count()
    }

    pub fn completed_count(&self, bucket: Bucket) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.bucket() == bucket && t.completed)
            .count()
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Switch the visible bucket. Leaves tasks and any edit session alone.
    pub fn set_filter(&mut self, bucket: Bucket) {
        trace!(from = %self.active_filter, to = %bucket, "set filter");
        self.active_filter = bucket;
    }

    /// Append a task to the active bucket and start editing it
    pub fn create_task(&mut self) -> TaskId {
        let title = self.default_title.clone();
        let id = self.insert(title.clone(), self.active_filter, false);
        self.edit_session = Some(EditSession {
            task_id: id,
            draft: title,
        });
        debug!(task = %id, bucket = %self.active_filter, "created task");
        id
    }

    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => {
                debug!(task = %id, "toggle ignored: no such task");
                false
            }
        }
    }

    /// Open an edit session on `id`, abandoning any uncommitted one
    pub fn start_edit(&mut self, id: TaskId) -> bool {
        let Some(title) = self.task(id).map(|t| t.title.clone()) else {
            debug!(task = %id, "edit ignored: no such task");
            return false;
        };
        if let Some(prev) = &self.edit_session
            && prev.task_id != id
        {
            debug!(task = %prev.task_id, "abandoned uncommitted edit");
        }
        self.edit_session = Some(EditSession {
            task_id: id,
            draft: title,
        });
        true
    }

    pub fn update_draft_title(&mut self, text: impl Into<String>) -> bool {
        match &mut self.edit_session {
            Some(session) => {
                session.draft = text.into();
                true
            }
            None => false,
        }
    }

    /// Write the draft onto the task and close the session. The draft is
    /// stored verbatim, empty or not.
    pub fn commit_edit(&mut self) -> Option<TaskId> {
        let session = self.edit_session.take()?;
        match self.task_mut(session.task_id) {
            Some(task) => {
                task.title = session.draft;
                Some(session.task_id)
            }
            None => None,
        }
    }

    /// Close the session without saving
    pub fn discard_edit(&mut self) -> Option<TaskId> {
        self.edit_session.take().map(|s| s.task_id)
    }

    /// Build the confirmation request for deleting `id`
    pub fn request_delete(&self, id: TaskId) -> Option<PendingAction> {
        self.task(id).map(|_| PendingAction::DeleteTask { id })
    }

    pub fn request_clear(&self, bucket: Bucket) -> PendingAction {
        PendingAction::ClearBucket { bucket }
    }

    /// Apply or drop a pending destructive action
    pub fn resolve(&mut self, action: PendingAction, decision: Decision) -> Outcome {
        if decision == Decision::Cancelled {
            debug!(?action, "cancelled by user");
            return Outcome::Cancelled;
        }
        match action {
            PendingAction::DeleteTask { id } => {
                let Some(index) = self.tasks.iter().position(|t| t.id() == id) else {
                    return Outcome::NotFound;
                };
                self.tasks.remove(index);
                if self.is_editing(id) {
                    self.edit_session = None;
                }
                info!(task = %id, "deleted task");
                Outcome::Removed(1)
            }
            PendingAction::ClearBucket { bucket } => {
                let before = self.tasks.len();
                self.tasks.retain(|t| t.bucket() != bucket);
                let removed = before - self.tasks.len();
                if let Some(session) = &self.edit_session
                    && self.task(session.task_id).is_none()
                {
                    self.edit_session = None;
                }
                info!(%bucket, removed, "cleared bucket");
                Outcome::Removed(removed)
            }
        }
    }

    /// Delete `id` after asking `confirm`
    pub fn delete_task(&mut self, id: TaskId, confirm: &mut impl Confirm) -> Outcome {
        let Some(action) = self.request_delete(id) else {
            debug!(task = %id, "delete ignored: no such task");
            return Outcome::NotFound;
        };
        let decision = confirm.confirm(&action.prompt());
        self.resolve(action, decision)
    }

    /// Remove every task in `bucket` after asking `confirm`
    pub fn clear_bucket(&mut self, bucket: Bucket, confirm: &mut impl Confirm) -> Outcome {
        let action = self.request_clear(bucket);
        let decision = confirm.confirm(&action.prompt());
        self.resolve(action, decision)
    }
}
