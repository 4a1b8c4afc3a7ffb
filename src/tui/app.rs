use std::io;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Task;
use crate::ops::date::{self, DateDraft};
use crate::ops::task_ops;

use super::gesture::PressTracker;
use super::input;
use super::render;
use super::theme::Theme;

/// Completion transition phases: the row holds a pressed style, then
/// releases. The toggle itself lands only after both phases have elapsed.
pub const TOGGLE_PRESS: Duration = Duration::from_millis(100);
pub const TOGGLE_RELEASE: Duration = Duration::from_millis(100);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Confirm,
}

/// Which entry field has input focus in Edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Date,
}

/// A completion toggle waiting for its transition to finish
#[derive(Debug, Clone)]
pub struct PendingToggle {
    pub task_id: String,
    pub deadline: Instant,
}

/// Delete affordance waiting on its yes/no confirmation
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub task_id: String,
    pub title: String,
}

/// Blocking validation popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Main application state
pub struct App {
    pub tasks: Vec<Task>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    pub edit_focus: EditField,
    pub title_draft: String,
    pub title_cursor: usize,
    pub date_draft: String,
    pub date_cursor: usize,
    /// Validated due date derived from the date draft
    pub candidate_date: Option<NaiveDate>,
    pub alert: Option<Alert>,
    pub confirm: Option<ConfirmDelete>,
    /// Toggles whose transition has not finished yet (at most one per row)
    pub pending_toggles: Vec<PendingToggle>,
    /// Per-row triple-press windows
    pub presses: PressTracker,
    pub show_help: bool,
    /// Transient message for the status row, cleared on the next keypress
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        App {
            tasks: Vec::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            cursor: 0,
            scroll_offset: 0,
            edit_focus: EditField::Title,
            title_draft: String::new(),
            title_cursor: 0,
            date_draft: String::new(),
            date_cursor: 0,
            candidate_date: None,
            alert: None,
            confirm: None,
            pending_toggles: Vec::new(),
            presses: PressTracker::new(),
            show_help: false,
            status_message: None,
        }
    }

    /// Whether a completion transition is pending for the row
    pub fn toggle_pending(&self, id: &str) -> bool {
        self.pending_toggles.iter().any(|p| p.task_id == id)
    }

    /// Re-evaluate the date draft against the wall-clock calendar day.
    pub fn refresh_date_draft(&mut self) {
        self.evaluate_date_draft(Local::now().date_naive());
    }

    /// Apply the draft evaluation for the given `today`. Split out from
    /// `refresh_date_draft` so calendar edge cases are testable with a
    /// fixed date.
    pub fn evaluate_date_draft(&mut self, today: NaiveDate) {
        match date::evaluate_draft(&self.date_draft, today) {
            DateDraft::Empty => self.candidate_date = None,
            // Raw text stays on screen; a previously validated candidate
            // is left alone so the user can keep typing
            DateDraft::Incomplete => {}
            DateDraft::Valid(d) => self.candidate_date = Some(d),
            DateDraft::Past => {
                self.candidate_date = None;
                self.alert = Some(Alert {
                    title: "Invalid Date".to_string(),
                    message: "please enter a future date".to_string(),
                });
            }
        }
    }

    /// Submit the entry drafts as a new task. On success both fields are
    /// cleared and input focus is dismissed; on a validation failure the
    /// drafts are retained behind the alert.
    pub fn submit_draft(&mut self) {
        match task_ops::add_task(&mut self.tasks, &self.title_draft, self.candidate_date) {
            Ok(id) => {
                self.title_draft.clear();
                self.title_cursor = 0;
                self.date_draft.clear();
                self.date_cursor = 0;
                self.candidate_date = None;
                self.edit_focus = EditField::Title;
                self.mode = Mode::Navigate;
                // Land the cursor on the task that was just added
                if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
                    self.cursor = pos;
                }
            }
            Err(e) => {
                self.alert = Some(Alert {
                    title: "Empty Task".to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    /// One press of the completion affordance on the cursor row.
    ///
    /// The press counts toward the row's triple-press window (three within
    /// the window deletes a completed row outright) and otherwise schedules
    /// the deferred toggle, unless one is already pending for the row. The
    /// pending transition is non-cancellable except by that deletion.
    pub fn press_complete_gesture(&mut self, now: Instant) {
        let (id, title, completed) = match self.tasks.get(self.cursor) {
            Some(t) => (t.id.clone(), t.title.clone(), t.completed),
            None => return,
        };

        if self.presses.press(&id, completed, now) >= 3 {
            self.remove_task(&id);
            self.status_message = Some(format!("deleted \"{}\"", title));
            return;
        }

        if !self.toggle_pending(&id) {
            self.pending_toggles.push(PendingToggle {
                task_id: id,
                deadline: now + TOGGLE_PRESS + TOGGLE_RELEASE,
            });
        }
    }

    /// Apply every pending toggle whose transition deadline has passed.
    /// Called on each event-loop tick.
    pub fn advance(&mut self, now: Instant) {
        if self.pending_toggles.is_empty() {
            return;
        }
        let due: Vec<String> = self
            .pending_toggles
            .iter()
            .filter(|p| p.deadline <= now)
            .map(|p| p.task_id.clone())
            .collect();
        if due.is_empty() {
            return;
        }
        self.pending_toggles.retain(|p| p.deadline > now);
        for id in &due {
            task_ops::toggle_complete(&mut self.tasks, id);
        }
    }

    /// Delete a task and discard its timed per-row state (press window and
    /// pending transition).
    pub fn remove_task(&mut self, id: &str) -> bool {
        let removed = task_ops::delete_task(&mut self.tasks, id);
        self.pending_toggles.retain(|p| p.task_id != id);
        self.presses.clear(id);
        self.clamp_cursor();
        removed
    }

    /// Open the yes/no confirmation for the cursor row.
    pub fn open_delete_confirm(&mut self) {
        if let Some(task) = self.tasks.get(self.cursor) {
            self.confirm = Some(ConfirmDelete {
                task_id: task.id.clone(),
                title: task.title.clone(),
            });
            self.mode = Mode::Confirm;
        }
    }

    fn clamp_cursor(&mut self) {
        if self.tasks.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.tasks.len() - 1);
        }
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.advance(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll timeout so transition and press-window deadlines fire
        // promptly even with no keyboard activity
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
