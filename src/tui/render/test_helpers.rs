use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::ops::task_ops;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 18;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A calendar date for fixtures.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build an App whose tasks went through the normal add path.
pub fn app_with_tasks(specs: &[(&str, Option<NaiveDate>)]) -> App {
    let mut app = App::new();
    for (title, due) in specs {
        task_ops::add_task(&mut app.tasks, title, *due).unwrap();
    }
    app
}

/// Mark the task with the given title completed, through the toggle op.
pub fn complete(app: &mut App, title: &str) {
    let id = app
        .tasks
        .iter()
        .find(|t| t.title == title)
        .map(|t| t.id.clone())
        .expect("no task with that title");
    task_ops::toggle_complete(&mut app.tasks, &id);
}
