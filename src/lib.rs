//! CaseForge: turn Jira issue descriptions into structured test cases
//!
//! This library fetches an issue's rich-text description from the Jira
//! REST API, flattens it to plain text, and asks a chat-completion
//! backend to produce numbered test cases from it.

pub mod adf;
pub mod cases;
pub mod cli;
pub mod config;
pub mod generator;
pub mod jira;
pub mod logging;
pub mod session;
pub mod transport;
pub mod ui;

// Re-export the pieces callers wire together
pub use adf::{extract_text, AdfNode};
pub use cases::{emphasize, split_blocks, CaseBlock};
pub use config::{load_config, parse_config, Config};
pub use generator::{create_generator, GenerateBackend, Generator, GeneratorError};
pub use jira::{fetch_description, NO_DESCRIPTION};
pub use session::{EditSession, FetchOutcome};
pub use transport::{FakeTransport, HttpResponse, SyncTransport, Transport, TransportError, UreqTransport};
