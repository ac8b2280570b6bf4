//! Requirement edit session
//!
//! Tracks the requirement text alongside the last fetched description
//! and whether the user has diverged from it. A dirty session refuses
//! to absorb a new fetch so hand-written edits are never overwritten.

/// What happened to a fetched description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The fetched text replaced the requirement field
    Applied,
    /// The session was dirty; the fetched text was discarded
    Suppressed,
}

/// Clean/dirty state around the requirement field.
///
/// The session is clean after construction, after absorbing a fetch,
/// and whenever the field is empty or matches the fetched text again.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    fetched_text: String,
    current_text: String,
    user_edited: bool,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last applied fetch
    pub fn fetched_text(&self) -> &str {
        &self.fetched_text
    }

    /// Current requirement field content
    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    /// True when the field holds user edits not yet cleared
    pub fn is_dirty(&self) -> bool {
        self.user_edited
    }

    /// Offer a fetched description to the session.
    ///
    /// Applied only when the session is clean; a dirty session keeps
    /// its current text untouched and reports `Suppressed`.
    pub fn absorb_fetch(&mut self, text: String) -> FetchOutcome {
        if self.user_edited {
            return FetchOutcome::Suppressed;
        }
        self.current_text = text.clone();
        self.fetched_text = text;
        FetchOutcome::Applied
    }

    /// Replace the requirement field with user-edited text.
    ///
    /// Clearing the field or restoring the fetched text returns the
    /// session to clean.
    pub fn edit(&mut self, text: String) {
        if text == self.current_text {
            return;
        }
        self.user_edited = !(text.is_empty() || text == self.fetched_text);
        self.current_text = text;
    }

    /// Drop user edits and restore the last fetched text.
    pub fn discard_edits(&mut self) {
        self.current_text = self.fetched_text.clone();
        self.user_edited = false;
    }
}
