//! Packaging of rendered HTML as a downloadable file.

use std::path::{Path, PathBuf};

/// Name of the downloaded file.
pub const DOWNLOAD_FILENAME: &str = "email-template.html";

/// MIME type of the downloaded file.
pub const DOWNLOAD_CONTENT_TYPE: &str = "text/html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDownload {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HtmlDownload {
    pub fn new(body: String) -> Self {
        Self {
            filename: DOWNLOAD_FILENAME,
            content_type: DOWNLOAD_CONTENT_TYPE,
            body,
        }
    }

    /// Write the file into `dir`, replacing any previous download.
    pub async fn save_into(&self, dir: &Path) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(self.filename);
        tokio::fs::write(&path, self.body.as_bytes()).await?;
        tracing::info!(path = %path.display(), bytes = self.body.len(), "Saved HTML download");
        Ok(path)
    }
}
