use anyhow::{Context, Result};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};
use std::io::{self, BufRead, IsTerminal, StdinLock};

use crate::chat::command::SlashCommandCompleter;
use crate::output;

const PROMPT_LABEL: &str = "Query:";
const PROMPT_HELP: &str = "Ask a coding question, /help for commands, Ctrl+C to quit";

/// One read from the user.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadEvent {
    Line(String),
    /// Ctrl+C or Escape at the prompt.
    Interrupted,
    /// Input stream closed.
    Eof,
}

/// Source of REPL input lines.
pub trait LineReader {
    fn read_line(&mut self) -> Result<ReadEvent>;
}

/// Picks the interactive prompt for terminals and plain line reading otherwise.
pub fn open_reader() -> Box<dyn LineReader> {
    if io::stdin().is_terminal() {
        Box::new(PromptReader::new())
    } else {
        Box::new(PipedReader::stdin())
    }
}

/// Interactive prompt with slash-command completion.
pub struct PromptReader {
    render_config: RenderConfig<'static>,
}

impl PromptReader {
    pub fn new() -> Self {
        if output::is_no_color() {
            return Self {
                render_config: RenderConfig::empty(),
            };
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightGreen)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self { render_config }
    }
}

impl Default for PromptReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for PromptReader {
    fn read_line(&mut self) -> Result<ReadEvent> {
        let input = Text::new(PROMPT_LABEL)
            .with_render_config(self.render_config)
            .with_autocomplete(SlashCommandCompleter)
            .with_help_message(PROMPT_HELP)
            .prompt();

        match input {
            Ok(line) => Ok(ReadEvent::Line(line)),
            Err(err) if is_prompt_cancelled(&err) => Ok(ReadEvent::Interrupted),
            Err(err) => Err(err.into()),
        }
    }
}

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Reads newline-terminated lines from any buffered source, e.g. piped stdin.
pub struct PipedReader<R> {
    inner: R,
}

impl PipedReader<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> PipedReader<R> {
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineReader for PipedReader<R> {
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the read.
    fn read_line(&mut self) -> Result<ReadEvent> {
        let mut buf = Vec::new();
        let bytes_read = self
            .inner
            .read_until(b'\n', &mut buf)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            return Ok(ReadEvent::Eof);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(ReadEvent::Line(
            line.trim_end_matches(['\n', '\r']).to_string(),
        ))
    }
}
