//! Storage provider configuration.

use serde::{Deserialize, Serialize};

/// Blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored documents.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// URL path prefix under which stored documents are served.
    #[serde(default = "default_public_base_path")]
    pub public_base_path: String,
    /// Maximum upload size in bytes (default 25 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Timeout for individual storage operations in seconds.
    ///
    /// A timed-out storage write is retried once; a timed-out delete is
    /// logged and skipped.
    #[serde(default = "default_operation_timeout")]
    pub operation_timeout_seconds: u64,
}

fn default_root_path() -> String {
    "data/uploads".to_string()
}

fn default_public_base_path() -> String {
    "/uploads".to_string()
}

fn default_max_upload() -> u64 {
    25 * 1024 * 1024
}

fn default_operation_timeout() -> u64 {
    10
}
