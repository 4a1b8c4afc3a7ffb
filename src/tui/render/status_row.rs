use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row: transient message or key hints on the left,
/// task count on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let left = match &app.status_message {
        Some(msg) => format!(" {}", msg),
        None => match app.mode {
            Mode::Navigate => " a add   space done   d delete   ? help   q quit".to_string(),
            Mode::Edit => " Enter add   Tab switch field   Esc back".to_string(),
            Mode::Confirm => " y delete   n keep".to_string(),
        },
    };
    let left_fg = if app.status_message.is_some() {
        app.theme.accent
    } else {
        app.theme.dim
    };

    let count = app.tasks.len();
    let right = format!("{} task{}", count, if count == 1 { "" } else { "s" });

    let mut spans = vec![Span::styled(
        left.clone(),
        Style::default().fg(left_fg).bg(bg),
    )];
    let left_width = unicode::display_width(&left);
    let right_width = unicode::display_width(&right) + 1;
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            right,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
