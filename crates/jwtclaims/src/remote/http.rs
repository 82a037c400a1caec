//! HTTP document retrieval

use crate::error::{Error, Result};
use crate::limits::MAX_DOCUMENT_SIZE;
use crate::remote::{CancellationSignal, DocumentFuture, DocumentRetriever};
use crate::url::validate_address;
use std::time::Duration;
use tracing::{debug, warn};

/// Retrieves documents over HTTP(S) with `reqwest`
///
/// Defaults: https required, 512KB response limit, no per-request timeout
/// beyond what the client itself is configured with.
#[derive(Debug, Clone)]
pub struct HttpDocumentRetriever {
    client: reqwest::Client,
    require_https: bool,
    max_response_size: usize,
    timeout: Option<Duration>,
}

impl HttpDocumentRetriever {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Use an existing client (connection pool, proxies, TLS settings)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            require_https: true,
            max_response_size: MAX_DOCUMENT_SIZE,
            timeout: None,
        }
    }

    /// Allow plain `http` addresses when set to `false`
    pub fn require_https(mut self, require: bool) -> Self {
        self.require_https = require;
        self
    }

    /// Reject responses larger than `bytes`
    pub fn max_response_size(mut self, bytes: usize) -> Self {
        self.max_response_size = bytes;
        self
    }

    /// Per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn fetch(&self, address: &str) -> Result<String> {
        validate_address(address, self.require_https).inspect_err(|error| {
            warn!(address, %error, "rejected document address");
        })?;

        debug!(address, "fetching document");

        let mut request = self.client.get(address);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::RemoteError(format!("network: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::RemoteError(format!(
                "http: status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::RemoteError(format!("network: {e}")))?;

        if bytes.len() > self.max_response_size {
            return Err(Error::RemoteResponseTooLarge {
                size: bytes.len(),
                max: self.max_response_size,
            });
        }

        let body = String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::RemoteError(format!("document: utf8 decode failed: {e}")))?;

        debug!(address, size = body.len(), "fetched document");
        Ok(body)
    }
}

impl Default for HttpDocumentRetriever {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRetriever for HttpDocumentRetriever {
    fn fetch_document<'a>(
        &'a self,
        address: &'a str,
        cancel: &'a CancellationSignal,
    ) -> DocumentFuture<'a> {
        Box::pin(cancel.run(self.fetch(address)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::cancellation;

    fn retriever() -> HttpDocumentRetriever {
        HttpDocumentRetriever::new().require_https(false)
    }

    #[tokio::test]
    async fn test_fetch_document() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/.well-known/openid-configuration")
            .with_status(200)
            .with_body(r#"{"issuer":"https://issuer.example"}"#)
            .create_async()
            .await;

        let address = format!("{}/.well-known/openid-configuration", server.url());
        let body = retriever()
            .fetch_document(&address, &CancellationSignal::none())
            .await
            .expect("fetch");

        assert_eq!(body, r#"{"issuer":"https://issuer.example"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_document_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let address = format!("{}/missing", server.url());
        let result = retriever()
            .fetch_document(&address, &CancellationSignal::none())
            .await;
        assert!(matches!(result, Err(Error::RemoteError(msg)) if msg.starts_with("http: status 404")));
    }

    #[tokio::test]
    async fn test_fetch_document_oversized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/big")
            .with_status(200)
            .with_body("a".repeat(65))
            .create_async()
            .await;

        let address = format!("{}/big", server.url());
        let result = retriever()
            .max_response_size(64)
            .fetch_document(&address, &CancellationSignal::none())
            .await;
        assert_eq!(
            result,
            Err(Error::RemoteResponseTooLarge { size: 65, max: 64 })
        );
    }

    #[tokio::test]
    async fn test_https_required_by_default() {
        let result = HttpDocumentRetriever::new()
            .fetch_document("http://localhost:1/config", &CancellationSignal::none())
            .await;
        assert!(matches!(result, Err(Error::RemoteError(msg)) if msg.contains("https")));
    }

    #[tokio::test]
    async fn test_cancelled_before_fetch() {
        let (handle, signal) = cancellation();
        handle.cancel();
        let result = retriever()
            .fetch_document("http://localhost:1/config", &signal)
            .await;
        assert_eq!(result, Err(Error::Cancelled));
    }
}
