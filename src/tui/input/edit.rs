use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, EditField, Mode};
use crate::util::unicode;

/// Maximum length of the date draft: mm/dd/yy
const DATE_DRAFT_MAX: usize = 8;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Back to the list; drafts are retained
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }

        // Switch between the title and date fields
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => {
            app.edit_focus = match app.edit_focus {
                EditField::Title => EditField::Date,
                EditField::Date => EditField::Title,
            };
        }

        // Submit the draft
        (_, KeyCode::Enter) => {
            app.submit_draft();
        }

        // Cursor movement: single grapheme left/right
        (m, KeyCode::Left)
            if !m.contains(KeyModifiers::ALT) && !m.contains(KeyModifiers::CONTROL) =>
        {
            let (buf, cursor) = field_mut(app);
            if let Some(prev) = unicode::prev_grapheme_boundary(buf.as_str(), *cursor) {
                *cursor = prev;
            }
        }
        (m, KeyCode::Right)
            if !m.contains(KeyModifiers::ALT) && !m.contains(KeyModifiers::CONTROL) =>
        {
            let (buf, cursor) = field_mut(app);
            if let Some(next) = unicode::next_grapheme_boundary(buf.as_str(), *cursor) {
                *cursor = next;
            }
        }

        // Jump to start/end of the field
        (m, KeyCode::Left) if m.contains(KeyModifiers::CONTROL) => {
            let (_, cursor) = field_mut(app);
            *cursor = 0;
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::CONTROL) => {
            let (buf, cursor) = field_mut(app);
            *cursor = buf.len();
        }
        (_, KeyCode::Home) => {
            let (_, cursor) = field_mut(app);
            *cursor = 0;
        }
        (_, KeyCode::End) => {
            let (buf, cursor) = field_mut(app);
            *cursor = buf.len();
        }

        // Word movement (Alt+Left, readline style)
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            let (buf, cursor) = field_mut(app);
            *cursor = unicode::word_boundary_left(buf.as_str(), *cursor);
        }

        // Backspace: delete a single grapheme
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            let (buf, cursor) = field_mut(app);
            if let Some(prev) = unicode::prev_grapheme_boundary(buf.as_str(), *cursor) {
                buf.drain(prev..*cursor);
                *cursor = prev;
            }
            if app.edit_focus == EditField::Date {
                app.refresh_date_draft();
            }
        }

        // Word backspace (Alt or Ctrl)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let (buf, cursor) = field_mut(app);
            let new_pos = unicode::word_boundary_left(buf.as_str(), *cursor);
            buf.drain(new_pos..*cursor);
            *cursor = new_pos;
            if app.edit_focus == EditField::Date {
                app.refresh_date_draft();
            }
        }

        // Type a character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => match app.edit_focus {
            EditField::Title => {
                app.title_draft.insert(app.title_cursor, c);
                app.title_cursor += c.len_utf8();
            }
            EditField::Date => {
                // Numeric-oriented input, capped at the mm/dd/yy length
                if (c.is_ascii_digit() || c == '/')
                    && app.date_draft.chars().count() < DATE_DRAFT_MAX
                {
                    app.date_draft.insert(app.date_cursor, c);
                    app.date_cursor += c.len_utf8();
                    app.refresh_date_draft();
                }
            }
        },

        _ => {}
    }
}

/// The draft buffer and cursor of the focused field
fn field_mut(app: &mut App) -> (&mut String, &mut usize) {
    match app.edit_focus {
        EditField::Title => (&mut app.title_draft, &mut app.title_cursor),
        EditField::Date => (&mut app.date_draft, &mut app.date_cursor),
    }
}
