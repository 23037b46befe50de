//! Acceptance tests for interactive filtering.
//!
//! Each test drives the app through the harness the way a user would:
//! typing, moving, deleting, confirming.

use crate::model::{MatchMode, Orientation};
use crate::state::SessionStatus;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

const GREETING: [&str; 6] = ["Hello", "How", "Can", "we", "do", "this"];

#[test]
fn typing_narrows_and_confirm_returns_record() {
    let mut harness = AcceptanceTestHarness::with_lines(&GREETING)
        .orientation(Orientation::TopDown)
        .build();
    assert_eq!(harness.matches(), GREETING.to_vec());

    harness.type_text("H");
    assert_eq!(harness.matches(), vec!["Hello", "How"]);
    assert_eq!(harness.session().viewport().cursor(), 0);

    harness.send_key(KeyCode::Down);
    assert_eq!(harness.session().selected_text(), Some("How"));

    let still_running = harness.send_key(KeyCode::Enter);
    assert!(!still_running);
    assert!(matches!(harness.status(), SessionStatus::Confirmed(_)));
    assert_eq!(harness.into_selection().as_deref(), Some("How"));
}

#[test]
fn backspace_widens_view_and_keeps_cursor_valid() {
    let mut harness = AcceptanceTestHarness::with_lines(&GREETING).build();

    harness.type_text("H");
    // Bottom-up: visual Up walks towards later matches.
    harness.send_key(KeyCode::Up);
    assert_eq!(harness.session().viewport().cursor(), 1);

    harness.send_key(KeyCode::Backspace);
    assert_eq!(harness.matches().len(), 6);
    assert!(harness.session().viewport().cursor() < 6);
    assert!(harness.session().selected_text().is_some());
}

#[test]
fn confirm_on_empty_result_keeps_running() {
    let mut harness = AcceptanceTestHarness::with_lines(&GREETING).build();

    harness.type_text("xyz");
    assert!(harness.matches().is_empty());

    assert!(harness.send_key(KeyCode::Enter));
    assert!(harness.is_running());

    harness.send_key(KeyCode::Backspace);
    harness.send_key(KeyCode::Backspace);
    harness.send_key(KeyCode::Backspace);
    assert_eq!(harness.matches().len(), 6);
}

#[test]
fn escape_cancels_without_selection() {
    let mut harness = AcceptanceTestHarness::with_lines(&GREETING).build();
    harness.type_text("w");

    assert!(!harness.send_key(KeyCode::Esc));
    assert_eq!(harness.status(), SessionStatus::Cancelled);
    assert_eq!(harness.into_selection(), None);
}

#[test]
fn ctrl_c_and_ctrl_d_cancel() {
    for ch in ['c', 'd'] {
        let mut harness = AcceptanceTestHarness::with_lines(&GREETING).build();
        harness.send_key_with_mods(KeyCode::Char(ch), KeyModifiers::CONTROL);
        assert_eq!(harness.status(), SessionStatus::Cancelled, "Ctrl+{ch}");
    }
}

#[test]
fn keys_after_exit_are_ignored() {
    let mut harness = AcceptanceTestHarness::with_lines(&GREETING).build();
    harness.send_key(KeyCode::Esc);

    assert!(!harness.send_key(KeyCode::Char('H')));
    assert!(harness.session().pattern().is_empty());
}

#[test]
fn ignore_case_mode_matches_any_case() {
    let mut harness = AcceptanceTestHarness::with_lines(&GREETING)
        .mode(MatchMode::literal().with_ignore_case(true))
        .build();

    harness.type_text("h");
    assert_eq!(harness.matches(), vec!["Hello", "How", "this"]);
}

#[test]
fn invert_mode_hides_matching_lines() {
    let mut harness = AcceptanceTestHarness::with_lines(&GREETING)
        .mode(MatchMode::literal().with_invert_match(true))
        .build();

    harness.type_text("o");
    assert_eq!(harness.matches(), vec!["Can", "we", "this"]);
}

#[test]
fn regex_mode_tolerates_incomplete_expression() {
    let mut harness = AcceptanceTestHarness::with_lines(&["a(b", "ab", "abc"])
        .mode(MatchMode::literal().with_regex(true))
        .build();

    harness.type_text("a(");
    assert_eq!(harness.matches(), vec!["a(b"]);

    harness.type_text("b)");
    assert_eq!(harness.matches(), vec!["ab", "abc"]);
}

#[test]
fn page_keys_move_by_window() {
    let lines: Vec<String> = (0..50).map(|i| format!("row {i}")).collect();
    let mut harness = AcceptanceTestHarness::with_lines(&lines)
        .orientation(Orientation::TopDown)
        .size(40, 12)
        .build();

    harness.send_key(KeyCode::PageDown);
    assert_eq!(harness.session().viewport().cursor(), 10);

    harness.send_key(KeyCode::End);
    assert_eq!(harness.session().viewport().cursor(), 49);

    harness.send_key(KeyCode::PageUp);
    assert_eq!(harness.session().viewport().cursor(), 39);

    harness.send_key(KeyCode::Home);
    assert_eq!(harness.session().viewport().cursor(), 0);
}

#[test]
fn resize_shrinks_window_and_keeps_cursor_visible() {
    let lines: Vec<String> = (0..30).map(|i| format!("row {i}")).collect();
    let mut harness = AcceptanceTestHarness::with_lines(&lines)
        .orientation(Orientation::TopDown)
        .size(40, 22)
        .build();

    for _ in 0..15 {
        harness.send_key(KeyCode::Down);
    }
    assert_eq!(harness.session().viewport().window_size(), 20);

    harness.resize(40, 7);
    let viewport = harness.session().viewport();
    assert_eq!(viewport.window_size(), 5);
    assert!(viewport.window_start() <= viewport.cursor());
    assert!(viewport.cursor() < viewport.window_end());
    assert!(harness.screen().contains("> row 15"));
}
