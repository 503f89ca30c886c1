use anyhow::Result;
use exitcode::ExitCode;
use std::path::{Path, PathBuf};

use crate::config::{ResolveOptions, load_resolved};
use crate::editor::{EditorLauncher, SystemEditor};
use crate::fs::{EDITOR_EXPORT_FILE, write_response};
use crate::generation::{Fetcher, GenerationClient};
use crate::ui::{PROCESSING_MESSAGE, Spinner, print_error, print_framed, print_status};

pub struct AskOptions {
    pub prompt: String,
    pub endpoint: Option<String>,
    pub output: Option<PathBuf>,
    pub vscode: bool,
}

/// Sends one prompt, prints the boxed response, then saves and/or opens it.
///
/// Returns the process exit code: `UNAVAILABLE` when no response came back,
/// `IOERR` when `--output` could not be written. Editor failures are
/// reported but do not change the exit code.
pub async fn run_ask(options: AskOptions) -> Result<ExitCode> {
    let config = load_resolved(&ResolveOptions {
        endpoint: options.endpoint.clone(),
    })?;

    let client = GenerationClient::new(&config.endpoint)?;
    let editor = if options.vscode {
        Some(SystemEditor::new(&config.editor)?)
    } else {
        None
    };

    let spinner = Spinner::new(PROCESSING_MESSAGE);
    let result = client.fetch(&options.prompt).await;
    spinner.stop();

    let response = match result {
        Ok(response) if response.is_empty() => {
            print_error("The API returned an empty response");
            return Ok(exitcode::UNAVAILABLE);
        }
        Ok(response) => response,
        Err(e) => {
            print_error(&e.to_string());
            return Ok(exitcode::UNAVAILABLE);
        }
    };

    print_framed(&response);

    if let Some(path) = &options.output {
        if let Err(e) = write_response(path, &response) {
            print_error(&e.to_string());
            return Ok(exitcode::IOERR);
        }
        print_status(&format!("Saved to: {}", path.display()));
    }

    if let Some(editor) = editor {
        open_response(&editor, options.output.as_deref(), &response);
    }

    Ok(exitcode::OK)
}

/// Opens the saved output file, or a fresh export when nothing was saved.
fn open_response(editor: &impl EditorLauncher, saved: Option<&Path>, response: &str) {
    let path = if let Some(path) = saved {
        path.to_path_buf()
    } else {
        let path = PathBuf::from(EDITOR_EXPORT_FILE);
        if let Err(e) = write_response(&path, response) {
            print_error(&e.to_string());
            return;
        }
        path
    };

    match editor.open(&path) {
        Ok(()) => print_status(&format!("Opened in {}: {}", editor.name(), path.display())),
        Err(e) => print_error(&e.to_string()),
    }
}
