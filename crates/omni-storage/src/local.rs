//! Local filesystem document store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use omni_core::config::storage::StorageConfig;
use omni_core::error::{AppError, ErrorKind};
use omni_core::result::AppResult;
use omni_core::traits::storage::{ByteStream, DocumentStore};

/// Local filesystem implementation of [`DocumentStore`].
///
/// Keys resolve under a single root directory; public URLs are the key
/// prefixed with the configured base path (e.g. `/uploads`).
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    /// Root directory for all stored documents.
    root: PathBuf,
    /// URL prefix under which documents are served.
    public_base: String,
}

impl LocalDocumentStore {
    /// Create a new local store rooted at the configured path.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base: config.public_base_path.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a relative key to an absolute path within the root.
    ///
    /// Path traversal components are stripped so a key can never escape
    /// the storage root.
    fn resolve(&self, path: &str) -> PathBuf {
        let mut clean = PathBuf::new();
        for component in Path::new(path.trim_start_matches('/')).components() {
            if let std::path::Component::Normal(part) = component {
                clean.push(part);
            }
        }
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Wrote document");
        Ok(())
    }

    async fn read(&self, path: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(path);
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Document not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open file: {path}"),
                    e,
                )
            }
        })?;

        Ok(Box::pin(ReaderStream::new(file)))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.resolve(path).exists())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path);
        if !full_path.exists() {
            return Err(AppError::not_found(format!("Document not found: {path}")));
        }
        fs::remove_file(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {path}"),
                e,
            )
        })?;
        debug!(path, "Deleted document");
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base, path.trim_start_matches('/'))
    }

    fn path_from_url(&self, url: &str) -> Option<String> {
        let prefix = format!("{}/", self.public_base);
        url.strip_prefix(&prefix).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store(dir: &tempfile::TempDir) -> LocalDocumentStore {
        let config = StorageConfig {
            root_path: dir.path().to_string_lossy().to_string(),
            public_base_path: "/uploads".to_string(),
            max_upload_size_bytes: 1024,
            operation_timeout_seconds: 5,
        };
        LocalDocumentStore::new(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_write_exists_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        store
            .write("e1/result-laudo.pdf", Bytes::from_static(b"pdf"))
            .await
            .unwrap();
        assert!(store.exists("e1/result-laudo.pdf").await.unwrap());

        store.delete("e1/result-laudo.pdf").await.unwrap();
        assert!(!store.exists("e1/result-laudo.pdf").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        let err = store.delete("nope/none.pdf").await.unwrap_err();
        assert_eq!(err.kind, omni_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_url_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        let url = store.public_url("e1/invoice-nf.pdf");
        assert_eq!(url, "/uploads/e1/invoice-nf.pdf");
        assert_eq!(
            store.path_from_url(&url).as_deref(),
            Some("e1/invoice-nf.pdf")
        );
        assert!(store.path_from_url("/elsewhere/x.pdf").is_none());
    }

    #[tokio::test]
    async fn test_resolve_strips_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        let resolved = store.resolve("../../etc/passwd");
        assert!(resolved.starts_with(dir.path()));
    }
}
