//! Edit session lifecycle tests
//!
//! Walk the clean/dirty state machine through realistic multi-step
//! editing sessions: fetch, edit, suppressed re-fetch, discard, and
//! the paths that return a dirty session to clean.

use caseforge::{EditSession, FetchOutcome};

#[test]
fn test_full_edit_lifecycle() {
    let mut session = EditSession::new();
    assert!(!session.is_dirty());
    assert_eq!(session.current_text(), "");

    // First fetch applies
    let outcome = session.absorb_fetch("Fetched description.".to_string());
    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(session.current_text(), "Fetched description.");
    assert!(!session.is_dirty());

    // User edit marks the session dirty
    session.edit("Fetched description. Plus my notes.".to_string());
    assert!(session.is_dirty());

    // Fetch while dirty is suppressed; the text survives
    let outcome = session.absorb_fetch("A newer description.".to_string());
    assert_eq!(outcome, FetchOutcome::Suppressed);
    assert_eq!(
        session.current_text(),
        "Fetched description. Plus my notes."
    );

    // Discard returns to clean with the fetched text
    session.discard_edits();
    assert!(!session.is_dirty());
    assert_eq!(session.current_text(), "Fetched description.");

    // Clean again: the next fetch applies
    let outcome = session.absorb_fetch("A newer description.".to_string());
    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(session.current_text(), "A newer description.");
    assert_eq!(session.fetched_text(), "A newer description.");
}

#[test]
fn test_clearing_the_field_reenables_fetch() {
    let mut session = EditSession::new();
    session.absorb_fetch("Original text.".to_string());

    // Type over it character by character, the way the UI edits
    session.edit("Original text. x".to_string());
    assert!(session.is_dirty());
    assert_eq!(
        session.absorb_fetch("ignored".to_string()),
        FetchOutcome::Suppressed
    );

    // Backspacing down to nothing makes it clean again
    session.edit(String::new());
    assert!(!session.is_dirty());
    assert_eq!(
        session.absorb_fetch("Second fetch.".to_string()),
        FetchOutcome::Applied
    );
    assert_eq!(session.current_text(), "Second fetch.");
}

#[test]
fn test_restoring_fetched_text_reenables_fetch() {
    let mut session = EditSession::new();
    session.absorb_fetch("Original text.".to_string());

    session.edit("Rewritten entirely.".to_string());
    assert!(session.is_dirty());

    // Manually typing the fetched text back counts as a revert
    session.edit("Original text.".to_string());
    assert!(!session.is_dirty());
    assert_eq!(
        session.absorb_fetch("Second fetch.".to_string()),
        FetchOutcome::Applied
    );
}

#[test]
fn test_hand_typed_requirement_survives_fetch_attempts() {
    // No fetch ever happened; anything typed is an edit worth keeping
    let mut session = EditSession::new();
    session.edit("Requirement written by hand.".to_string());
    assert!(session.is_dirty());

    for _ in 0..3 {
        assert_eq!(
            session.absorb_fetch("remote text".to_string()),
            FetchOutcome::Suppressed
        );
    }
    assert_eq!(session.current_text(), "Requirement written by hand.");
    assert_eq!(session.fetched_text(), "");
}

#[test]
fn test_discard_on_clean_session_is_harmless() {
    let mut session = EditSession::new();
    session.absorb_fetch("Fetched.".to_string());

    session.discard_edits();
    assert!(!session.is_dirty());
    assert_eq!(session.current_text(), "Fetched.");
}
