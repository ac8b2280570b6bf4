//! Application state for the terminal UI
//!
//! State is transient: credential inputs, the requirement edit session,
//! and the generated blocks. Nothing is persisted between runs except
//! what config.toml already holds.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::cases::{split_blocks, CaseBlock};
use crate::config::Config;
use crate::generator::{create_generator, GenerateBackend};
use crate::jira;
use crate::session::{EditSession, FetchOutcome};
use crate::transport::Transport;

const MISSING_JIRA_CREDENTIALS: &str = "Please enter all Jira credentials.";
const MISSING_GENERATOR_KEY: &str = "Please enter your generator API key.";
const MISSING_REQUIREMENT: &str =
    "Please enter a requirement description to generate test cases.";
const UNSAVED_EDITS_WARNING: &str =
    "You have unsaved edits. Clear the field before fetching again.";

/// Application lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Quitting,
}

/// Focusable UI fields, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Domain,
    IssueKey,
    Username,
    ApiToken,
    GeneratorKey,
    Requirement,
    Results,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Domain => Field::IssueKey,
            Field::IssueKey => Field::Username,
            Field::Username => Field::ApiToken,
            Field::ApiToken => Field::GeneratorKey,
            Field::GeneratorKey => Field::Requirement,
            Field::Requirement => Field::Results,
            Field::Results => Field::Domain,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Domain => Field::Results,
            Field::IssueKey => Field::Domain,
            Field::Username => Field::IssueKey,
            Field::ApiToken => Field::Username,
            Field::GeneratorKey => Field::ApiToken,
            Field::Requirement => Field::GeneratorKey,
            Field::Results => Field::Requirement,
        }
    }
}

/// Severity of the status-bar notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Status-bar message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// One generated test case as shown in the results panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseView {
    pub block: CaseBlock,
    /// Collapsed by default; toggled from the results panel
    pub collapsed: bool,
}

/// Main application state
pub struct App {
    /// Jira domain input
    pub domain: String,
    /// Issue key input
    pub issue_key: String,
    /// Jira username input
    pub username: String,
    /// Jira API token input (masked in the view)
    pub api_token: String,
    /// Generator API key input (masked in the view)
    pub generator_key: String,
    /// Requirement field with clean/dirty tracking
    pub session: EditSession,
    /// Generated test-case blocks
    pub cases: Vec<CaseView>,
    /// Selected case in the results panel
    pub selected_case: usize,
    /// Focused field
    pub focus: Field,
    /// Status-bar notice
    pub notice: Option<Notice>,

    state: AppState,

    // Generator config carried from config.toml
    provider: String,
    base_url: String,
    model: String,

    /// HTTP transport shared by fetch and generation
    transport: Transport,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, Transport::default())
    }

    /// Create app with custom transport (for testing)
    pub fn with_transport(config: &Config, transport: Transport) -> Self {
        Self {
            domain: config.jira_domain.clone(),
            issue_key: String::new(),
            username: config.jira_username.clone(),
            api_token: config.jira_api_token.clone(),
            generator_key: config.api_key.clone(),
            session: EditSession::new(),
            cases: Vec::new(),
            selected_case: 0,
            focus: Field::Domain,
            notice: None,
            state: AppState::Running,
            provider: config.provider.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            transport,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn set_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
        });
    }

    /// Route a typed character to the focused field
    pub fn handle_char(&mut self, c: char) {
        match self.focus {
            Field::Domain => self.domain.push(c),
            Field::IssueKey => self.issue_key.push(c),
            Field::Username => self.username.push(c),
            Field::ApiToken => self.api_token.push(c),
            Field::GeneratorKey => self.generator_key.push(c),
            Field::Requirement => {
                let mut text = self.session.current_text().to_string();
                text.push(c);
                self.session.edit(text);
            }
            Field::Results => {
                if c == ' ' {
                    self.toggle_selected_case();
                }
            }
        }
    }

    pub fn handle_backspace(&mut self) {
        match self.focus {
            Field::Domain => {
                self.domain.pop();
            }
            Field::IssueKey => {
                self.issue_key.pop();
            }
            Field::Username => {
                self.username.pop();
            }
            Field::ApiToken => {
                self.api_token.pop();
            }
            Field::GeneratorKey => {
                self.generator_key.pop();
            }
            Field::Requirement => {
                let mut text = self.session.current_text().to_string();
                text.pop();
                self.session.edit(text);
            }
            Field::Results => {}
        }
    }

    /// Enter inserts a newline in the requirement, toggles in results,
    /// and otherwise advances focus
    pub fn handle_enter(&mut self) {
        match self.focus {
            Field::Requirement => {
                let mut text = self.session.current_text().to_string();
                text.push('\n');
                self.session.edit(text);
            }
            Field::Results => self.toggle_selected_case(),
            _ => self.focus_next(),
        }
    }

    pub fn select_next_case(&mut self) {
        if self.focus != Field::Results || self.cases.is_empty() {
            return;
        }
        if self.selected_case + 1 < self.cases.len() {
            self.selected_case += 1;
        }
    }

    pub fn select_prev_case(&mut self) {
        if self.focus != Field::Results {
            return;
        }
        self.selected_case = self.selected_case.saturating_sub(1);
    }

    pub fn toggle_selected_case(&mut self) {
        if let Some(case) = self.cases.get_mut(self.selected_case) {
            case.collapsed = !case.collapsed;
        }
    }

    /// Drop requirement edits and restore the fetched description
    pub fn discard_edits(&mut self) {
        self.session.discard_edits();
        self.set_notice(
            NoticeKind::Info,
            "Edits discarded; restored the fetched description.",
        );
    }

    /// Fetch the issue description into the requirement field.
    ///
    /// Credentials are checked first; a dirty session suppresses the
    /// fetch entirely so the remote call is never issued.
    pub fn fetch(&mut self) {
        if self.domain.trim().is_empty()
            || self.issue_key.trim().is_empty()
            || self.username.trim().is_empty()
            || self.api_token.trim().is_empty()
        {
            self.set_notice(NoticeKind::Error, MISSING_JIRA_CREDENTIALS);
            return;
        }

        if self.session.is_dirty() {
            warn!(issue_key = %self.issue_key, "fetch suppressed: unsaved edits");
            self.set_notice(NoticeKind::Warning, UNSAVED_EDITS_WARNING);
            return;
        }

        let request_id = Uuid::new_v4();
        info!(%request_id, issue_key = %self.issue_key, "fetching issue description");

        match jira::fetch_description(
            &self.transport,
            &self.domain,
            &self.issue_key,
            &self.username,
            &self.api_token,
        ) {
            Ok(text) => match self.session.absorb_fetch(text) {
                FetchOutcome::Applied => {
                    self.set_notice(
                        NoticeKind::Info,
                        format!("Fetched description for {}.", self.issue_key),
                    );
                }
                FetchOutcome::Suppressed => {
                    self.set_notice(NoticeKind::Warning, UNSAVED_EDITS_WARNING);
                }
            },
            Err(e) => {
                error!(%request_id, error = %e, "fetch failed");
                self.set_notice(NoticeKind::Error, format!("Fetch failed: {}", e));
            }
        }
    }

    /// Generate test cases from the current requirement text.
    ///
    /// Both guards run before any network call: the API key (unless the
    /// stub provider is configured), then a non-blank requirement.
    pub fn generate(&mut self) {
        if self.provider != "stub" && self.generator_key.trim().is_empty() {
            self.set_notice(NoticeKind::Error, MISSING_GENERATOR_KEY);
            return;
        }

        if self.session.current_text().trim().is_empty() {
            self.set_notice(NoticeKind::Error, MISSING_REQUIREMENT);
            return;
        }

        let generator = match create_generator(
            &self.provider,
            &self.base_url,
            &self.model,
            &self.generator_key,
            self.transport.clone(),
        ) {
            Ok(generator) => generator,
            Err(e) => {
                self.set_notice(NoticeKind::Error, format!("Generator setup failed: {}", e));
                return;
            }
        };

        let request_id = Uuid::new_v4();
        info!(%request_id, provider = generator.provider_name(), "generating test cases");

        match generator.generate(self.session.current_text()) {
            Ok(raw) => {
                self.cases = split_blocks(&raw)
                    .into_iter()
                    .map(|block| CaseView {
                        block,
                        collapsed: true,
                    })
                    .collect();
                self.selected_case = 0;
                self.set_notice(
                    NoticeKind::Info,
                    format!("Generated {} test case(s).", self.cases.len()),
                );
            }
            Err(e) => {
                error!(%request_id, error = %e, "generation failed");
                self.set_notice(NoticeKind::Error, format!("Generation failed: {}", e));
            }
        }
    }
}
