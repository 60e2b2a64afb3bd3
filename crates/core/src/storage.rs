//! Flat-directory storage for uploaded images.
//!
//! Files are named `<epoch-millis>-<original filename>` and written into a
//! single directory that is created on first use. Two uploads sharing both
//! the millisecond and the original name resolve to the same file; the
//! later write wins.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Default storage directory, relative to the working directory.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// URL prefix under which stored files are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Name used when the client sends no usable filename.
const FALLBACK_FILENAME: &str = "upload";

/// Result of a successful store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Name of the file inside the storage directory.
    pub filename: String,
    /// Relative URL the file is served under, e.g. `/uploads/1700000000000-logo.png`.
    pub url: String,
}

/// Strip any directory components from a client-supplied filename.
pub fn sanitize_original_name(original: &str) -> &str {
    let base = original
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "." || base == ".." {
        FALLBACK_FILENAME
    } else {
        base
    }
}

/// Compose the stored filename from an upload timestamp and the original name.
pub fn stored_filename(epoch_millis: i64, original: &str) -> String {
    format!("{epoch_millis}-{}", sanitize_original_name(original))
}

#[derive(Debug, Clone)]
pub struct ImageStorage {
    dir: PathBuf,
}

impl ImageStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `bytes` under a name derived from the current time.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredImage, CoreError> {
        let now = chrono::Utc::now().timestamp_millis();
        self.store_at(now, original_name, bytes).await
    }

    /// Store `bytes` under a name derived from `epoch_millis`.
    pub async fn store_at(
        &self,
        epoch_millis: i64,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredImage, CoreError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            CoreError::Internal(format!(
                "Failed to create upload dir {}: {e}",
                self.dir.display()
            ))
        })?;

        let filename = stored_filename(epoch_millis, original_name);
        let path = self.dir.join(&filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to write {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored uploaded image");

        Ok(StoredImage {
            url: format!("{UPLOAD_URL_PREFIX}/{filename}"),
            filename,
        })
    }
}
