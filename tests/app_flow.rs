//! End-to-end flows driven through the key handler: adding tasks from the
//! entry fields, the transition-gated completion toggle, confirm-gated
//! deletion, and the triple-press shortcut.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use ticklist::ops::task_ops;
use ticklist::tui::app::{App, EditField, Mode};
use ticklist::tui::input::handle_key;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key(app, key(KeyCode::Char(c)));
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn titles(app: &App) -> Vec<&str> {
    app.tasks.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn add_a_task_from_the_entry_field() {
    let mut app = App::new();

    handle_key(&mut app, key(KeyCode::Char('a')));
    assert_eq!(app.mode, Mode::Edit);

    type_str(&mut app, "buy milk");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(titles(&app), vec!["buy milk"]);
    assert!(!app.tasks[0].completed);
    assert_eq!(app.tasks[0].due_date, None);
    // Focus is dismissed and the drafts are cleared
    assert_eq!(app.mode, Mode::Navigate);
    assert_eq!(app.title_draft, "");
}

#[test]
fn empty_title_raises_a_blocking_alert() {
    let mut app = App::new();

    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_key(&mut app, key(KeyCode::Enter));

    assert!(app.tasks.is_empty());
    assert!(app.alert.is_some());
    assert_eq!(app.mode, Mode::Edit);

    // The alert swallows everything except its dismissal
    handle_key(&mut app, key(KeyCode::Char('x')));
    assert_eq!(app.title_draft, "");
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.alert.is_none());
}

#[test]
fn add_a_task_with_a_due_date() {
    let mut app = App::new();

    handle_key(&mut app, key(KeyCode::Char('a')));
    type_str(&mut app, "call mom");
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.edit_focus, EditField::Date);

    type_str(&mut app, "12/31/99");
    assert_eq!(app.candidate_date, Some(date(2099, 12, 31)));

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks[0].due_date, Some(date(2099, 12, 31)));
    assert_eq!(app.date_draft, "");
    assert_eq!(app.candidate_date, None);
}

#[test]
fn impossible_calendar_date_sets_no_candidate() {
    let mut app = App::new();

    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_key(&mut app, key(KeyCode::Tab));
    type_str(&mut app, "02/30/24");

    // Lexically valid, but February has no day 30: silently ignored
    assert_eq!(app.candidate_date, None);
    assert!(app.alert.is_none());
    assert_eq!(app.date_draft, "02/30/24");
}

#[test]
fn past_date_raises_an_alert_while_typing() {
    let mut app = App::new();

    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_key(&mut app, key(KeyCode::Tab));
    type_str(&mut app, "01/15/24");

    assert_eq!(app.candidate_date, None);
    let alert = app.alert.clone().expect("alert");
    assert_eq!(alert.message, "please enter a future date");
}

#[test]
fn date_field_filters_characters_and_caps_length() {
    let mut app = App::new();

    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_key(&mut app, key(KeyCode::Tab));
    type_str(&mut app, "ab12/31/99xx00");

    // Letters are rejected and input stops at eight characters
    assert_eq!(app.date_draft, "12/31/99");
}

#[test]
fn esc_keeps_the_drafts_for_later() {
    let mut app = App::new();

    handle_key(&mut app, key(KeyCode::Char('a')));
    type_str(&mut app, "half-typed");
    handle_key(&mut app, key(KeyCode::Esc));

    assert_eq!(app.mode, Mode::Navigate);
    assert_eq!(app.title_draft, "half-typed");
}

#[test]
fn backspace_edits_the_focused_field() {
    let mut app = App::new();

    handle_key(&mut app, key(KeyCode::Char('a')));
    type_str(&mut app, "milkk");
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.title_draft, "milk");

    // Word delete clears back to the previous word boundary
    type_str(&mut app, " and eggs");
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Backspace, KeyModifiers::ALT),
    );
    assert_eq!(app.title_draft, "milk and ");
}

#[test]
fn completion_toggle_waits_for_the_transition() {
    let mut app = App::new();
    task_ops::add_task(&mut app.tasks, "laundry", None).unwrap();

    handle_key(&mut app, key(KeyCode::Char(' ')));
    assert_eq!(app.pending_toggles.len(), 1);
    assert!(!app.tasks[0].completed);

    // Before the 200ms transition finishes nothing is applied
    app.advance(Instant::now());
    assert!(!app.tasks[0].completed);

    app.advance(Instant::now() + Duration::from_millis(250));
    assert!(app.tasks[0].completed);
    assert!(app.pending_toggles.is_empty());
}

#[test]
fn toggling_twice_restores_the_original_state() {
    let mut app = App::new();
    task_ops::add_task(&mut app.tasks, "laundry", None).unwrap();

    handle_key(&mut app, key(KeyCode::Char(' ')));
    app.advance(Instant::now() + Duration::from_millis(250));
    assert!(app.tasks[0].completed);

    // Second gesture well after the first, so it cannot count toward a
    // triple-press window
    let later = Instant::now() + Duration::from_millis(700);
    app.press_complete_gesture(later);
    app.advance(later + Duration::from_millis(250));
    assert!(!app.tasks[0].completed);
}

#[test]
fn delete_is_gated_behind_confirmation() {
    let mut app = App::new();
    task_ops::add_task(&mut app.tasks, "old chore", None).unwrap();

    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.mode, Mode::Confirm);

    // Declining leaves the task alone
    handle_key(&mut app, key(KeyCode::Char('n')));
    assert_eq!(app.mode, Mode::Navigate);
    assert_eq!(app.tasks.len(), 1);

    // Affirming removes it
    handle_key(&mut app, key(KeyCode::Char('d')));
    handle_key(&mut app, key(KeyCode::Char('y')));
    assert!(app.tasks.is_empty());
    assert_eq!(app.status_message.as_deref(), Some("deleted \"old chore\""));
}

#[test]
fn triple_press_deletes_a_completed_task() {
    let mut app = App::new();
    task_ops::add_task(&mut app.tasks, "done deal", None).unwrap();
    let id = app.tasks[0].id.clone();
    task_ops::toggle_complete(&mut app.tasks, &id);

    // Three rapid completion gestures inside the 500ms window
    handle_key(&mut app, key(KeyCode::Char(' ')));
    handle_key(&mut app, key(KeyCode::Char(' ')));
    handle_key(&mut app, key(KeyCode::Char(' ')));

    assert!(app.tasks.is_empty());
    assert!(app.pending_toggles.is_empty());
}

#[test]
fn sort_keeps_completed_tasks_at_the_bottom() {
    let mut app = App::new();
    task_ops::add_task(&mut app.tasks, "A", Some(date(2025, 2, 1))).unwrap();
    task_ops::add_task(&mut app.tasks, "B", None).unwrap();
    task_ops::add_task(&mut app.tasks, "C", Some(date(2025, 1, 1))).unwrap();
    task_ops::add_task(&mut app.tasks, "D", Some(date(2025, 1, 10))).unwrap();
    assert_eq!(titles(&app), vec!["C", "D", "A", "B"]);

    // Complete C through the gesture path
    app.cursor = 0;
    handle_key(&mut app, key(KeyCode::Char(' ')));
    app.advance(Instant::now() + Duration::from_millis(250));

    assert_eq!(titles(&app), vec!["D", "A", "B", "C"]);
    assert!(app.tasks[3].completed);
}

#[test]
fn help_overlay_blocks_input_until_dismissed() {
    let mut app = App::new();
    task_ops::add_task(&mut app.tasks, "one", None).unwrap();

    handle_key(&mut app, key(KeyCode::Char('?')));
    assert!(app.show_help);

    // List keys are swallowed while help is up
    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.mode, Mode::Navigate);
    assert!(app.confirm.is_none());

    handle_key(&mut app, key(KeyCode::Esc));
    assert!(!app.show_help);
}

#[test]
fn quit_from_navigate() {
    let mut app = App::new();
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
