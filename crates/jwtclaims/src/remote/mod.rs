//! Document retrieval boundary
//!
//! Configuration documents (OIDC discovery metadata and the like) are
//! fetched by a caller-supplied `DocumentRetriever` and interpreted by a
//! `ConfigurationRetriever`. Nothing here caches results.

pub mod cancel;
pub mod config;
pub mod file;
pub mod http;

use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

pub use cancel::{CancellationHandle, CancellationSignal, cancellation};
pub use config::{ConfigurationRetriever, get_configuration};
pub use file::FileDocumentRetriever;
pub use http::HttpDocumentRetriever;

/// Future returned by `DocumentRetriever::fetch_document`
pub type DocumentFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

/// Fetches the raw text of a document from an address
///
/// # Errors
///
/// Implementations should report failures as `Error::RemoteError` with a
/// component prefix (e.g. `"network: connection failed"`,
/// `"http: status 404"`), `Error::AddressMissing` for an empty address, and
/// `Error::Cancelled` once the signal fires.
pub trait DocumentRetriever: Send + Sync {
    fn fetch_document<'a>(
        &'a self,
        address: &'a str,
        cancel: &'a CancellationSignal,
    ) -> DocumentFuture<'a>;
}
