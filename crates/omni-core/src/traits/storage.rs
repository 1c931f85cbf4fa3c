//! Blob-storage trait for event document attachments.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading stored document contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for the document blob store backing event attachments.
///
/// The trait is defined here in `omni-core` and implemented in
/// `omni-storage`. Paths are relative keys like
/// `{event_id}/{slot}-{file_name}`; the provider derives the public URL
/// an attachment record carries, and can map such a URL back to a key for
/// deletion.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to the given key, creating parent directories as needed.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Read a stored document as a byte stream.
    async fn read(&self, path: &str) -> AppResult<ByteStream>;

    /// Check whether a document exists at the given key.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Delete the document at the given key.
    ///
    /// Deleting a missing document is a not-found error; callers decide
    /// whether that is fatal.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Derive the public URL under which a stored key is served.
    fn public_url(&self, path: &str) -> String;

    /// Map a public URL back to a storage key, if it belongs to this store.
    fn path_from_url(&self, url: &str) -> Option<String>;
}
