//! Chat mode UI components.

use console::Term;

use super::command::SLASH_COMMANDS;
use crate::ui::{Style, print_framed};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Substrings that suggest a response contains source code.
const CODE_INDICATORS: &[&str] = &[
    "def ",
    "class ",
    "import ",
    "function ",
    "const ",
    "let ",
    "var ",
    "fn ",
    "print(",
    "printf(",
    "console.log",
    "#include",
    "public ",
    "```",
];

pub fn looks_like_code(text: &str) -> bool {
    CODE_INDICATORS.iter().any(|needle| text.contains(needle))
}

/// Clears the terminal. Does nothing when stdout is redirected.
pub fn clear_screen() {
    let term = Term::stdout();
    if term.is_term() {
        term.clear_screen().ok();
    }
}

pub fn print_banner() {
    println!(
        "{} {} - AI Coding Assistant",
        Style::header("mateai"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary("Assisting with coding tasks and development")
    );
    println!(
        "Type {} for available commands",
        Style::command("/help")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::header("Session ended. Happy coding!"));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (usage, description) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{usage:<14}")),
            Style::secondary(description)
        );
    }
    println!();
    println!("Enter your coding question or request to get assistance.");
    println!();
}

/// Prints entries numbered from 1, oldest first.
pub fn print_history(entries: &[String]) {
    if entries.is_empty() {
        println!("{}", Style::secondary("No queries yet"));
        return;
    }

    for (index, entry) in entries.iter().enumerate() {
        println!("{}", Style::value(format!("{}: {entry}", index + 1)));
    }
}

pub fn print_response(text: &str) {
    println!();
    println!("{}", Style::header("Response:"));
    print_framed(text);
    println!();
}

pub fn print_code_hint() {
    println!(
        "{}",
        Style::hint(
            "Tip: Use '/vscode' to open this in your editor or '/save filename' to save to a file"
        )
    );
}
