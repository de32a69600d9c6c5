//! Emote fetching over HTTP
//!
//! Wraps the HTTP client with the CDN URL scheme and streams fetched images
//! to disk. Each emote gets exactly one attempt; callers decide what a
//! failure means.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::{defaults, urls};
use crate::core::size::EmoteSize;
use crate::error::FetchError;

/// HTTP fetcher for remote emote images
#[derive(Debug, Clone)]
pub struct EmoteFetcher {
    /// HTTP client
    client: reqwest::Client,
    /// CDN base URL
    base_url: String,
}

impl EmoteFetcher {
    /// Create a fetcher pointed at the default CDN
    pub fn new() -> Self {
        Self::with_base_url(urls::EMOTE_CDN)
    }

    /// Create a fetcher pointed at a custom CDN base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(defaults::FETCH_TIMEOUT_SECS))
                .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the remote URL for an emote at the requested size
    pub fn emote_url(&self, id: &str, size: EmoteSize) -> String {
        format!(
            "{}/{id}.png?size={}&quality=lossless",
            self.base_url,
            size.as_u32()
        )
    }

    /// Fetch an emote and stream it to `dest`
    ///
    /// Performs a single attempt: a non-success status is an error, parent
    /// directories are created as needed, and a partially written file is
    /// removed before returning an error.
    ///
    /// # Returns
    /// Number of bytes written to `dest`
    pub async fn fetch(&self, id: &str, size: EmoteSize, dest: &Path) -> Result<u64, FetchError> {
        let url = self.emote_url(id, size);

        match self.fetch_once(&url, dest).await {
            Ok(written) => Ok(written),
            Err(e) => {
                // Drop any partial file
                let _ = tokio::fs::remove_file(dest).await;
                Err(e)
            }
        }
    }

    async fn fetch_once(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        // Create parent directories if needed
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FetchError::Io {
                    path: parent.to_path_buf(),
                    error: e.to_string(),
                })?;
        }

        let mut file = File::create(dest).await.map_err(|e| FetchError::Io {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| FetchError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk).await.map_err(|e| FetchError::Io {
                path: dest.to_path_buf(),
                error: e.to_string(),
            })?;

            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| FetchError::Io {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(written)
    }
}

impl Default for EmoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_emote_url_template() {
        let fetcher = EmoteFetcher::new();
        assert_eq!(
            fetcher.emote_url("123456", EmoteSize::Px128),
            format!("{}/123456.png?size=128&quality=lossless", urls::EMOTE_CDN)
        );
    }

    #[test]
    fn test_emote_url_custom_base_trims_slash() {
        let fetcher = EmoteFetcher::with_base_url("http://localhost:9999/");
        assert_eq!(
            fetcher.emote_url("7", EmoteSize::Px48),
            "http://localhost:9999/7.png?size=48&quality=lossless"
        );
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        let content = b"\x89PNG\r\n\x1a\nfake image data";

        Mock::given(method("GET"))
            .and(path("/42.png"))
            .and(query_param("size", "128"))
            .and(query_param("quality", "lossless"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("42.png");
        let fetcher = EmoteFetcher::with_base_url(&mock_server.uri());

        let written = fetcher.fetch("42", EmoteSize::Px128, &dest).await.unwrap();

        assert_eq!(written, content.len() as u64);
        assert_eq!(std::fs::read(&dest).unwrap(), content);
    }

    #[tokio::test]
    async fn test_fetch_creates_parent_dirs() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/9.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"png".to_vec()))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("some").join("nested").join("9.png");
        let fetcher = EmoteFetcher::with_base_url(&mock_server.uri());

        fetcher.fetch("9", EmoteSize::Px128, &dest).await.unwrap();

        assert!(dest.exists());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/404.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("404.png");
        let fetcher = EmoteFetcher::with_base_url(&mock_server.uri());

        let result = fetcher.fetch("404", EmoteSize::Px128, &dest).await;

        match result.unwrap_err() {
            FetchError::Status { status, .. } => assert_eq!(status, 404),
            e => panic!("Expected Status error, got: {e:?}"),
        }
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_fetch_single_attempt_only() {
        let mock_server = MockServer::start().await;

        // Exactly one request must arrive, even on failure
        Mock::given(method("GET"))
            .and(path("/500.png"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("500.png");
        let fetcher = EmoteFetcher::with_base_url(&mock_server.uri());

        let result = fetcher.fetch("500", EmoteSize::Px128, &dest).await;

        assert!(result.is_err());
    }
}
