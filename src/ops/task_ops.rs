use std::cmp::Ordering;

use chrono::{Local, NaiveDate};

use crate::model::task::Task;

/// Error type for the add operation. Toggle and delete never fail: an unknown
/// id is a silent no-op, since ids always originate from a rendered row.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddError {
    #[error("please enter a task description")]
    EmptyTitle,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Add a task to the collection. The title is trimmed and must be non-empty;
/// the due date has already been validated by the draft evaluation.
/// Returns the generated id. On success the whole sequence is re-sorted.
pub fn add_task(
    tasks: &mut Vec<Task>,
    draft_title: &str,
    due_date: Option<NaiveDate>,
) -> Result<String, AddError> {
    let title = draft_title.trim();
    if title.is_empty() {
        return Err(AddError::EmptyTitle);
    }

    let id = generate_id(tasks);
    tasks.push(Task::new(id.clone(), title.to_string(), due_date));
    sort_tasks(tasks);
    Ok(id)
}

/// Flip the completed flag of the task matching `id`, then re-sort so
/// completed tasks relocate to the bottom. Returns whether a task matched.
pub fn toggle_complete(tasks: &mut [Task], id: &str) -> bool {
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        return false;
    };
    task.completed = !task.completed;
    sort_tasks(tasks);
    true
}

/// Remove the task matching `id`. Returns whether a task was removed.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Derived ordering, recomputed after every mutation: completed tasks after
/// incomplete ones; within each group, dated tasks chronologically ascending
/// and undated tasks last. Stable within ties.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| match (a.due_date, b.due_date) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(da), Some(db)) => da.cmp(&db),
            })
    });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate a unique id from the current wall-clock milliseconds, bumping
/// past any id already present so two adds in the same millisecond stay
/// distinct.
fn generate_id(tasks: &[Task]) -> String {
    let mut millis = Local::now().timestamp_millis();
    while tasks.iter().any(|t| t.id == millis.to_string()) {
        millis += 1;
    }
    millis.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
