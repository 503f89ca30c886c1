use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

use super::FetchError;

/// Public text-generation endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://text.pollinations.ai";

/// Upper bound for a single request, connect through last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Turns a prompt into generated text.
///
/// One call is one attempt: no retries, no streaming.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, prompt: &str) -> Result<String, FetchError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn fetch(&self, prompt: &str) -> Result<String, FetchError> {
        (**self).fetch(prompt).await
    }
}

/// Client for endpoints that take the prompt as the last URL path segment
/// and answer with plain text.
pub struct GenerationClient {
    client: Client,
    base_url: Url,
}

impl GenerationClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: {endpoint}"))?;

        if base_url.cannot_be_a_base() {
            bail!("Invalid endpoint URL: {endpoint} cannot carry a path");
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Appends `prompt` to the base URL as one percent-encoded path segment.
    ///
    /// `.` and `..` are rejected: URL normalization would drop them, even
    /// percent-encoded, and the request would hit the endpoint root instead.
    pub fn prompt_url(&self, prompt: &str) -> Result<Url, FetchError> {
        if matches!(prompt, "." | "..") {
            return Err(FetchError::Unexpected(format!(
                "prompt '{prompt}' cannot be sent as a URL path segment"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                FetchError::Unexpected(format!(
                    "endpoint cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(prompt);
        Ok(url)
    }
}

impl Fetcher for GenerationClient {
    async fn fetch(&self, prompt: &str) -> Result<String, FetchError> {
        let url = self.prompt_url(prompt)?;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::ApiStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Serves one canned response and yields the request line it received.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{addr}"), handle)
    }

    #[tokio::test]
    async fn test_fetch_returns_body_on_200() {
        let (url, server) = serve_once(http_response("200 OK", "print('hi')")).await;
        let client = GenerationClient::new(&url).unwrap();

        let body = client.fetch("say hi").await.unwrap();

        assert_eq!(body, "print('hi')");
        assert_eq!(server.await.unwrap(), "GET /say%20hi HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_maps_server_error_to_api_status() {
        let (url, _server) = serve_once(http_response("500 Internal Server Error", "oops")).await;
        let client = GenerationClient::new(&url).unwrap();

        let err = client.fetch("hello").await.unwrap_err();

        assert_eq!(err, FetchError::ApiStatus(500));
    }

    #[tokio::test]
    async fn test_fetch_only_accepts_exactly_200() {
        let (url, _server) = serve_once(http_response("201 Created", "made")).await;
        let client = GenerationClient::new(&url).unwrap();

        let err = client.fetch("hello").await.unwrap_err();

        assert_eq!(err, FetchError::ApiStatus(201));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GenerationClient::new(&format!("http://{addr}")).unwrap();
        let err = client.fetch("hello").await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client =
            GenerationClient::with_timeout(&format!("http://{addr}"), Duration::from_millis(200))
                .unwrap();
        let err = client.fetch("hello").await.unwrap_err();

        assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_fetch_keeps_base_path() {
        let (url, server) = serve_once(http_response("200 OK", "ok")).await;
        let client = GenerationClient::new(&format!("{url}/api/")).unwrap();

        client.fetch("hi").await.unwrap();

        assert_eq!(server.await.unwrap(), "GET /api/hi HTTP/1.1");
    }

    #[test]
    fn test_prompt_url_escapes_reserved_characters() {
        let client = GenerationClient::new("https://example.com").unwrap();

        let url = client.prompt_url("what is 50% of 10? a/b #tag").unwrap();

        assert_eq!(
            url.as_str(),
            "https://example.com/what%20is%2050%25%20of%2010%3F%20a%2Fb%20%23tag"
        );
    }

    #[test]
    fn test_prompt_url_keeps_query() {
        let client = GenerationClient::new("https://example.com/?model=openai").unwrap();

        let url = client.prompt_url("hi").unwrap();

        assert_eq!(url.as_str(), "https://example.com/hi?model=openai");
    }

    #[test]
    fn test_prompt_url_rejects_single_dot() {
        let client = GenerationClient::new("https://example.com").unwrap();

        let err = client.prompt_url(".").unwrap_err();

        assert!(matches!(err, FetchError::Unexpected(_)));
    }

    #[test]
    fn test_prompt_url_rejects_double_dot() {
        let client = GenerationClient::new("https://example.com/api").unwrap();

        let err = client.prompt_url("..").unwrap_err();

        assert!(matches!(err, FetchError::Unexpected(_)));
    }

    #[test]
    fn test_prompt_url_keeps_dots_inside_longer_prompts() {
        let client = GenerationClient::new("https://example.com").unwrap();

        let url = client.prompt_url("...").unwrap();

        assert_eq!(url.as_str(), "https://example.com/...");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        assert!(GenerationClient::new("not a url").is_err());
    }

    #[test]
    fn test_new_rejects_cannot_be_a_base_url() {
        assert!(GenerationClient::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_request_timeout_is_thirty_seconds() {
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(30));
    }
}
