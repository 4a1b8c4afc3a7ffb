use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, EditField, Mode};

/// Render the bordered entry area: a title field and a date field
pub fn render_input_area(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Edit;
    let border = if editing {
        app.theme.accent
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    render_title_field(frame, app, rows[0]);
    render_date_field(frame, app, rows[1]);
}

fn render_title_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == Mode::Edit && app.edit_focus == EditField::Title;
    let mut spans = vec![Span::styled(
        " ",
        Style::default().bg(app.theme.background),
    )];
    push_field_spans(
        &mut spans,
        app,
        &app.title_draft,
        app.title_cursor,
        focused,
        "Add a new task...",
        app.theme.text,
    );
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.background)),
        area,
    );
}

fn render_date_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == Mode::Edit && app.edit_focus == EditField::Date;
    // The calendar glyph and text pick up the accent-to-teal shift once a
    // candidate date validates
    let (glyph_color, text_color) = if app.candidate_date.is_some() {
        (app.theme.done, app.theme.done)
    } else {
        (app.theme.accent, app.theme.text)
    };

    let bg = app.theme.background;
    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled("\u{25A6}", Style::default().fg(glyph_color).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    push_field_spans(
        &mut spans,
        app,
        &app.date_draft,
        app.date_cursor,
        focused,
        "mm/dd/yy",
        text_color,
    );
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// Push the field text with a ▌ cursor when focused, or its placeholder
/// when empty
fn push_field_spans(
    spans: &mut Vec<Span<'static>>,
    app: &App,
    text: &str,
    cursor: usize,
    focused: bool,
    placeholder: &str,
    color: Color,
) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(color).bg(bg);
    let placeholder_style = Style::default().fg(app.theme.dim).bg(bg);

    if !focused {
        if text.is_empty() {
            spans.push(Span::styled(placeholder.to_string(), placeholder_style));
        } else {
            spans.push(Span::styled(text.to_string(), text_style));
        }
        return;
    }

    spans.push(Span::styled(text[..cursor].to_string(), text_style));
    spans.push(Span::styled(
        "\u{258C}".to_string(),
        Style::default().fg(app.theme.accent).bg(bg),
    ));
    spans.push(Span::styled(text[cursor..].to_string(), text_style));
    if text.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), placeholder_style));
    }
}
