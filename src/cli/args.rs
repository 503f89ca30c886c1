use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mateai")]
#[command(about = "AI coding assistant for the terminal")]
#[command(version)]
pub struct Args {
    /// Prompt to send once (starts interactive mode if omitted)
    pub prompt: Option<String>,

    /// Open the response in the configured editor
    #[arg(long)]
    pub vscode: bool,

    /// Save the response to a file
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// API endpoint URL
    #[arg(short = 'e', long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Hide the spinner and status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// The single-shot prompt, if one was given and is not blank.
    pub fn single_shot_prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.trim().is_empty())
    }
}
