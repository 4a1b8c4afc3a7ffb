use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Rolling window for the triple-press quick delete.
pub const PRESS_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
struct PressWindow {
    count: u8,
    deadline: Instant,
}

/// Counts rapid completion presses per row, keyed by task id.
///
/// A window opens only on a row that is completed at the moment of the
/// press; once open, every press before the deadline counts. A press after
/// the deadline discards the stale window (and may open a fresh one), so a
/// lapsed window never carries its count forward.
#[derive(Debug, Default)]
pub struct PressTracker {
    windows: HashMap<String, PressWindow>,
}

impl PressTracker {
    pub fn new() -> Self {
        PressTracker {
            windows: HashMap::new(),
        }
    }

    /// Record one press of the completion affordance. Returns the in-window
    /// press count, or 0 when no window is active for the row.
    pub fn press(&mut self, id: &str, row_completed: bool, now: Instant) -> u8 {
        if let Some(w) = self.windows.get_mut(id) {
            if now <= w.deadline {
                w.count = w.count.saturating_add(1);
                return w.count;
            }
            self.windows.remove(id);
        }
        if row_completed {
            self.windows.insert(
                id.to_string(),
                PressWindow {
                    count: 1,
                    deadline: now + PRESS_WINDOW,
                },
            );
            return 1;
        }
        0
    }

    /// Drop the window for a row. Called when the row's task is deleted so
    /// no stale window outlives its task.
    pub fn clear(&mut self, id: &str) {
        self.windows.remove(id);
    }

    /// Whether a window is currently held for the row.
    pub fn tracking(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }
}
