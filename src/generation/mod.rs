mod client;
mod error;

pub use client::{DEFAULT_ENDPOINT, Fetcher, GenerationClient, REQUEST_TIMEOUT};
pub use error::FetchError;
