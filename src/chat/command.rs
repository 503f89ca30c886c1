use inquire::autocompletion::{Autocomplete, Replacement};
use thiserror::Error;

// Available slash commands: (usage, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show this help message"),
    ("/clear", "Clear the screen"),
    ("/history", "Show your query history"),
    ("/vscode", "Open last response in the editor"),
    ("/save [file]", "Save last response to a file"),
    ("/exit", "Exit the program"),
    ("/quit", "Exit the program"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(usage, _)| usage.starts_with(input))
            .map(|(usage, desc)| format!("{usage}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    Clear,
    History,
    Vscode,
    /// `/save` with an optional target path.
    Save(Option<String>),
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// A command that was recognized but cannot run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("No previous response to {0}")]
    NoPreviousResponse(&'static str),

    #[error("Unknown command: /{0}. Type /help for available commands")]
    Unknown(String),
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input.strip_prefix('/').map_or_else(
        || Input::Text(input.to_string()),
        |cmd| Input::Command(parse_slash_command(cmd)),
    )
}

fn parse_slash_command(cmd: &str) -> SlashCommand {
    let (name, argument) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));

    match name {
        "" | "help" => SlashCommand::Help,
        "clear" => SlashCommand::Clear,
        "history" => SlashCommand::History,
        "vscode" => SlashCommand::Vscode,
        "save" => SlashCommand::Save((!argument.is_empty()).then(|| argument.to_string())),
        "exit" | "quit" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(name.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("   \t "), Input::Empty);
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(
            parse_input("  write a fizzbuzz in rust  "),
            Input::Text("write a fizzbuzz in rust".to_string())
        );
    }

    #[test]
    fn test_slash_inside_text_is_a_prompt() {
        assert_eq!(
            parse_input("what does a/b mean"),
            Input::Text("what does a/b mean".to_string())
        );
    }

    #[test]
    fn test_parse_bare_slash_is_help() {
        assert_eq!(parse_input("/"), Input::Command(SlashCommand::Help));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
        assert_eq!(parse_input("/clear"), Input::Command(SlashCommand::Clear));
        assert_eq!(
            parse_input("/history"),
            Input::Command(SlashCommand::History)
        );
        assert_eq!(parse_input("/vscode"), Input::Command(SlashCommand::Vscode));
    }

    #[test]
    fn test_parse_quit_commands() {
        assert_eq!(parse_input("/quit"), Input::Command(SlashCommand::Quit));
        assert_eq!(parse_input("/exit"), Input::Command(SlashCommand::Quit));
    }

    #[test]
    fn test_parse_save_without_path() {
        assert_eq!(parse_input("/save"), Input::Command(SlashCommand::Save(None)));
        assert_eq!(
            parse_input("/save   "),
            Input::Command(SlashCommand::Save(None))
        );
    }

    #[test]
    fn test_parse_save_with_path() {
        assert_eq!(
            parse_input("/save out.txt"),
            Input::Command(SlashCommand::Save(Some("out.txt".to_string())))
        );
    }

    #[test]
    fn test_parse_save_path_with_spaces() {
        assert_eq!(
            parse_input("/save  my notes/answer 1.py "),
            Input::Command(SlashCommand::Save(Some("my notes/answer 1.py".to_string())))
        );
    }

    #[test]
    fn test_command_name_must_match_exactly() {
        assert_eq!(
            parse_input("/saveas x"),
            Input::Command(SlashCommand::Unknown("saveas".to_string()))
        );
        assert_eq!(
            parse_input("/q"),
            Input::Command(SlashCommand::Unknown("q".to_string()))
        );
        assert_eq!(
            parse_input("/HELP"),
            Input::Command(SlashCommand::Unknown("HELP".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/unknown with args"),
            Input::Command(SlashCommand::Unknown("unknown".to_string()))
        );
    }

    #[test]
    fn test_command_error_messages() {
        assert_eq!(
            CommandError::NoPreviousResponse("save").to_string(),
            "No previous response to save"
        );
        assert_eq!(
            CommandError::Unknown("foo".to_string()).to_string(),
            "Unknown command: /foo. Type /help for available commands"
        );
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/s").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/save [file]"));

        let suggestions = completer.get_suggestions("/h").unwrap();
        assert_eq!(suggestions.len(), 2); // /help, /history
    }

    #[test]
    fn test_completer_completion_drops_usage_hint() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/save [file]  Save last response to a file".to_string();
        let completion = completer.get_completion("/s", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/save".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
