//! Terminal interface
//!
//! UI is a deterministic surface only:
//! - NO async
//! - NO background threads
//! - Every fetch and generation is an explicit, blocking action

pub mod state;
pub mod view;

// Re-exports
pub use state::{App, AppState, CaseView, Field, Notice, NoticeKind};
pub use view::render;
