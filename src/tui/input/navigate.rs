use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, EditField, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Clear any transient status message on keypress
    app.status_message = None;

    match (key.modifiers, key.code) {
        // Quit: q or Ctrl+Q
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // List movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.tasks.len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) => {
            app.cursor = app.tasks.len().saturating_sub(1);
        }

        // Start a new task draft
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.edit_focus = EditField::Title;
            app.mode = Mode::Edit;
        }

        // Completion gesture on the cursor row
        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            app.press_complete_gesture(Instant::now());
        }

        // Delete affordance, gated behind the yes/no confirmation
        (KeyModifiers::NONE, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            app.open_delete_confirm();
        }

        _ => {}
    }
}
