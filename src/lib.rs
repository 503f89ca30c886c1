//! # mateai - AI Coding Assistant CLI
//!
//! `mateai` sends coding questions to a hosted text-generation endpoint and
//! prints the answer in a bordered, word-wrapped box.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive mode
//! mateai
//!
//! # Single prompt
//! mateai "write fizzbuzz in python"
//!
//! # Single prompt, saved to a file
//! mateai "write fizzbuzz in python" -o fizzbuzz.py
//! ```
//!
//! ## Interactive commands
//!
//! `/help`, `/clear`, `/history`, `/vscode`, `/save [file]`, `/exit`, `/quit`.
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/mateai/config.toml`:
//!
//! ```toml
//! [mateai]
//! endpoint = "https://text.pollinations.ai"
//! editor = "code"
//! ```

/// Interactive REPL mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// External editor launching.
pub mod editor;

/// File system utilities.
pub mod fs;

/// Text-generation client.
pub mod generation;

/// Line input for the REPL.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors, response box).
pub mod ui;
