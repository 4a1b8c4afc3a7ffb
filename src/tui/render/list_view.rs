use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::date;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the task list: checkbox, title, due date, cursor highlight.
/// Adjusts the scroll offset so the cursor row stays visible.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.tasks.is_empty() {
        let empty =
            Paragraph::new(" No tasks yet").style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let visible_height = area.height as usize;

    // Keep the cursor visible
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let in_transition = app.toggle_pending(&task.id);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let checkbox_color = if task.completed {
            app.theme.done
        } else {
            app.theme.accent
        };

        let mut title_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        if in_transition {
            // Pressed: the row dims until the transition releases
            title_style = title_style.add_modifier(Modifier::DIM);
        }

        let due_text = task.due_date.map(date::format_due);
        let due_reserved = due_text
            .as_deref()
            .map_or(0, |d| unicode::display_width(d) + 2);

        let avail = width.saturating_sub(5 + due_reserved + 1);
        let title = unicode::truncate_to_width(&task.title, avail);

        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(checkbox, Style::default().fg(checkbox_color).bg(row_bg)),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(title, title_style),
        ];

        // Due date, right-aligned
        if let Some(due) = due_text {
            let used: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            let due_w = unicode::display_width(&due);
            let pad = width.saturating_sub(used + due_w + 1);
            spans.push(Span::styled(" ".repeat(pad), Style::default().bg(row_bg)));
            let due_color = if task.completed {
                app.theme.dim
            } else {
                app.theme.accent
            };
            spans.push(Span::styled(due, Style::default().fg(due_color).bg(row_bg)));
        }

        // Pad the cursor row to full width
        if is_cursor {
            let used: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            if used < width {
                spans.push(Span::styled(
                    " ".repeat(width - used),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
