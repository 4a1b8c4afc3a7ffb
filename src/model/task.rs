use chrono::NaiveDate;

/// A single to-do entry.
///
/// Tasks are created only through `ops::task_ops::add_task`, flipped only via
/// `toggle_complete`, and removed only via `delete_task`. There is no
/// edit-title operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Opaque unique token, stable for the task's lifetime. Used as the
    /// list key for timed per-row state.
    pub id: String,
    /// Trimmed, non-empty description
    pub title: String,
    /// Initially false
    pub completed: bool,
    /// `None` means "no due date"
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Build a task from an already-generated id and an already-trimmed,
    /// validated title. Callers outside `ops::task_ops` go through `add_task`.
    pub(crate) fn new(id: String, title: String, due_date: Option<NaiveDate>) -> Self {
        Task {
            id,
            title,
            completed: false,
            due_date,
        }
    }
}
