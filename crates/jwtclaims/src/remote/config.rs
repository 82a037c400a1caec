//! Interpreting fetched documents into configuration models

use crate::error::Result;
use crate::remote::{CancellationSignal, DocumentRetriever};

/// Turns raw document text into a configuration model
pub trait ConfigurationRetriever {
    type Configuration;

    fn interpret(&self, document: &str) -> Result<Self::Configuration>;
}

/// Fetch a document and interpret it
///
/// Fetch failures are returned before interpretation is attempted.
pub async fn get_configuration<R, C>(
    address: &str,
    retriever: &R,
    interpreter: &C,
    cancel: &CancellationSignal,
) -> Result<C::Configuration>
where
    R: DocumentRetriever + ?Sized,
    C: ConfigurationRetriever + ?Sized,
{
    let document = retriever.fetch_document(address, cancel).await?;
    interpreter.interpret(&document)
}
