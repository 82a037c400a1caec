//! File system document retrieval

use crate::error::{Error, Result};
use crate::remote::{CancellationSignal, DocumentFuture, DocumentRetriever};
use tracing::debug;

/// Reads documents from local files; the address is a path
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDocumentRetriever;

impl FileDocumentRetriever {
    pub fn new() -> Self {
        Self
    }

    async fn read(&self, address: &str) -> Result<String> {
        if address.trim().is_empty() {
            return Err(Error::AddressMissing);
        }

        debug!(address, "reading document");
        tokio::fs::read_to_string(address)
            .await
            .map_err(|e| Error::DocumentUnavailable {
                address: address.to_string(),
                reason: e.to_string(),
            })
    }
}

impl DocumentRetriever for FileDocumentRetriever {
    fn fetch_document<'a>(
        &'a self,
        address: &'a str,
        cancel: &'a CancellationSignal,
    ) -> DocumentFuture<'a> {
        Box::pin(cancel.run(self.read(address)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_address() {
        let result = FileDocumentRetriever::new()
            .fetch_document("", &CancellationSignal::none())
            .await;
        assert_eq!(result, Err(Error::AddressMissing));
    }

    #[tokio::test]
    async fn test_file_not_found() {
        let result = FileDocumentRetriever::new()
            .fetch_document("OpenIdConnectMetadata.json", &CancellationSignal::none())
            .await;
        assert!(matches!(
            result,
            Err(Error::DocumentUnavailable { address, .. }) if address == "OpenIdConnectMetadata.json"
        ));
    }

    #[tokio::test]
    async fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"keys":[]}}"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let body = FileDocumentRetriever::new()
            .fetch_document(&path, &CancellationSignal::none())
            .await
            .unwrap();
        assert_eq!(body, r#"{"keys":[]}"#);
    }
}
