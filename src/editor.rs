//! External editor launching.
//!
//! The session only depends on [`EditorLauncher`], so tests can substitute a
//! recorder for the real process spawn.

use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Editor command used when none is configured.
pub const DEFAULT_EDITOR: &str = "code";

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Editor command is empty")]
    EmptyCommand,

    #[error("Editor '{program}' not found. Is it in your PATH?")]
    NotFound { program: String },

    #[error("Error opening editor '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Editor '{program}' exited with {status}")]
    ExitStatus { program: String, status: String },
}

/// Opens a file in an external editor.
pub trait EditorLauncher {
    /// Human-readable editor name for status messages.
    fn name(&self) -> &str;

    fn open(&self, path: &Path) -> Result<(), EditorError>;
}

impl<T: EditorLauncher + ?Sized> EditorLauncher for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn open(&self, path: &Path) -> Result<(), EditorError> {
        (**self).open(path)
    }
}

/// Launches a program found on `PATH`, e.g. `code` or `code --wait`.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    program: String,
    args: Vec<String>,
}

impl SystemEditor {
    /// Parses a whitespace-separated command line: program, then arguments.
    pub fn new(command: &str) -> Result<Self, EditorError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(EditorError::EmptyCommand)?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl EditorLauncher for SystemEditor {
    fn name(&self) -> &str {
        &self.program
    }

    fn open(&self, path: &Path) -> Result<(), EditorError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    EditorError::NotFound {
                        program: self.program.clone(),
                    }
                } else {
                    EditorError::Spawn {
                        program: self.program.clone(),
                        source,
                    }
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(EditorError::ExitStatus {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}
