use anyhow::Result;
use clap::Parser;

use mateai_cli::cli::Args;
use mateai_cli::cli::commands::{ask, chat};
use mateai_cli::output::{self, OutputConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Some(prompt) = args.single_shot_prompt().map(str::to_string) {
        let options = ask::AskOptions {
            prompt,
            endpoint: args.endpoint,
            output: args.output,
            vscode: args.vscode,
        };
        let code = ask::run_ask(options).await?;
        if code != exitcode::OK {
            std::process::exit(code);
        }
    } else {
        let options = chat::ChatOptions {
            endpoint: args.endpoint,
        };
        chat::run_chat(options).await?;
    }

    Ok(())
}
