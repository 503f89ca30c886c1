//! Interactive REPL mode.
//!
//! Lines starting with `/` are slash commands handled locally; everything
//! else is sent to the generation endpoint as a prompt.

/// Slash command parsing and autocomplete.
pub mod command;
mod history;
mod session;
mod ui;

pub use history::{HISTORY_DISPLAY_LIMIT, History};
pub use session::{ChatSession, Flow, SessionConfig};
