use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ResolveOptions, load_resolved};
use crate::editor::SystemEditor;
use crate::generation::GenerationClient;
use crate::input::open_reader;

pub struct ChatOptions {
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_resolved(&ResolveOptions {
        endpoint: options.endpoint,
    })?;

    let client = GenerationClient::new(&config.endpoint)?;
    let editor = SystemEditor::new(&config.editor)?;

    let mut session = ChatSession::new(SessionConfig::default(), client, editor);
    let mut reader = open_reader();
    session.run(reader.as_mut()).await
}
