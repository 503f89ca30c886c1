//! Line input for the REPL.

mod reader;

pub use reader::{LineReader, PipedReader, PromptReader, ReadEvent, open_reader};
