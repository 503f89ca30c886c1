use anyhow::Result;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use super::command::{CommandError, Input, SlashCommand, parse_input};
use super::history::{HISTORY_DISPLAY_LIMIT, History};
use super::ui;
use crate::editor::EditorLauncher;
use crate::fs::{DEFAULT_SAVE_FILE, EDITOR_EXPORT_FILE, write_response};
use crate::generation::Fetcher;
use crate::input::{LineReader, ReadEvent};
use crate::ui::{PROCESSING_MESSAGE, Spinner, Style, print_error, print_status};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where `/save` writes when no path is given.
    pub default_save_path: PathBuf,
    /// Where `/vscode` exports the last response before opening it.
    pub editor_export_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            editor_export_path: PathBuf::from(EDITOR_EXPORT_FILE),
        }
    }
}

/// Whether the loop keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive coding-assistant session.
///
/// Owns the query history and the last successful response. Both live only
/// as long as the session.
pub struct ChatSession<F, E> {
    config: SessionConfig,
    fetcher: F,
    editor: E,
    history: History,
    last_response: Option<String>,
}

impl<F: Fetcher, E: EditorLauncher> ChatSession<F, E> {
    pub const fn new(config: SessionConfig, fetcher: F, editor: E) -> Self {
        Self {
            config,
            fetcher,
            editor,
            history: History::new(),
            last_response: None,
        }
    }

    pub const fn history(&self) -> &History {
        &self.history
    }

    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    /// Reads and handles lines until an exit command, an interrupt or EOF.
    pub async fn run(&mut self, reader: &mut dyn LineReader) -> Result<()> {
        ui::clear_screen();
        ui::print_banner();

        loop {
            match reader.read_line()? {
                ReadEvent::Line(line) => {
                    if self.handle_line(&line).await == Flow::Exit {
                        break;
                    }
                }
                ReadEvent::Interrupted | ReadEvent::Eof => {
                    println!(); // Clear line before goodbye message
                    break;
                }
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Records a non-empty line in the history, then dispatches it.
    pub async fn handle_line(&mut self, line: &str) -> Flow {
        match parse_input(line) {
            Input::Empty => Flow::Continue,
            Input::Command(cmd) => {
                self.history.push(line.trim());
                self.handle_command(cmd)
            }
            Input::Text(prompt) => {
                self.history.push(prompt.as_str());
                self.ask(&prompt).await
            }
        }
    }

    fn handle_command(&self, cmd: SlashCommand) -> Flow {
        match cmd {
            SlashCommand::Quit => return Flow::Exit,
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Clear => {
                ui::clear_screen();
                ui::print_banner();
            }
            SlashCommand::History => {
                ui::print_history(self.history.recent(HISTORY_DISPLAY_LIMIT));
            }
            SlashCommand::Vscode => self.open_in_editor(),
            SlashCommand::Save(path) => match path {
                Some(path) => self.save(Path::new(&path)),
                None => self.save(&self.config.default_save_path),
            },
            SlashCommand::Unknown(name) => print_error(&CommandError::Unknown(name).to_string()),
        }
        Flow::Continue
    }

    fn save(&self, path: &Path) {
        let Some(response) = self.last_response.as_deref() else {
            print_error(&CommandError::NoPreviousResponse("save").to_string());
            return;
        };

        match write_response(path, response) {
            Ok(()) => print_status(&format!("Saved to: {}", path.display())),
            Err(e) => print_error(&e.to_string()),
        }
    }

    fn open_in_editor(&self) {
        let Some(response) = self.last_response.as_deref() else {
            print_error(&CommandError::NoPreviousResponse("open in the editor").to_string());
            return;
        };

        let path = &self.config.editor_export_path;
        if let Err(e) = write_response(path, response) {
            print_error(&e.to_string());
            return;
        }

        match self.editor.open(path) {
            Ok(()) => print_status(&format!(
                "Opened in {}: {}",
                self.editor.name(),
                path.display()
            )),
            Err(e) => print_error(&e.to_string()),
        }
    }

    async fn ask(&mut self, prompt: &str) -> Flow {
        let spinner = Spinner::new(PROCESSING_MESSAGE);
        let result = unless_interrupted(self.fetcher.fetch(prompt), tokio::signal::ctrl_c()).await;
        spinner.stop();

        // Ctrl+C during a request ends the session like Ctrl+C at the prompt.
        let Some(result) = result else {
            println!();
            return Flow::Exit;
        };

        match result {
            Ok(response) if response.is_empty() => {
                print_error("The API returned an empty response");
            }
            Ok(response) => {
                ui::print_response(&response);
                if ui::looks_like_code(&response) {
                    ui::print_code_hint();
                }
                self.last_response = Some(response);
            }
            Err(e) => {
                print_error(&e.to_string());
                eprintln!(
                    "{}",
                    Style::secondary("Unable to process your request. Please try again.")
                );
            }
        }
        Flow::Continue
    }
}

/// Runs `work` to completion unless `interrupt` fires first.
///
/// An interrupt future that fails (no signal handler available) is ignored.
async fn unless_interrupted<T>(
    work: impl Future<Output = T>,
    interrupt: impl Future<Output = io::Result<()>>,
) -> Option<T> {
    tokio::select! {
        output = work => Some(output),
        Ok(()) = interrupt => None,
    }
}
