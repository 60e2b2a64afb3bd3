//! Layout resolver: loads the static HTML layout containing the placeholders.
//!
//! The file is re-read on every call, so edits on disk take effect without
//! a restart. Required tokens are not checked before substitution.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Default location of the layout file, relative to the working directory.
pub const DEFAULT_LAYOUT_PATH: &str = "templates/layout.html";

#[derive(Debug, Clone)]
pub struct LayoutResolver {
    path: PathBuf,
}

impl LayoutResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw layout text.
    pub async fn load(&self) -> Result<String, CoreError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to read layout file");
            CoreError::Internal(format!("Error reading layout file: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn loads_layout_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.html");
        std::fs::write(&path, "<h1>{{title}}</h1>").unwrap();

        let resolver = LayoutResolver::new(&path);
        assert_eq!(resolver.load().await.unwrap(), "<h1>{{title}}</h1>");
    }

    #[tokio::test]
    async fn picks_up_changes_between_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.html");
        std::fs::write(&path, "v1").unwrap();
        let resolver = LayoutResolver::new(&path);
        assert_eq!(resolver.load().await.unwrap(), "v1");

        std::fs::write(&path, "v2").unwrap();
        assert_eq!(resolver.load().await.unwrap(), "v2");
    }

    #[tokio::test]
    async fn missing_file_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = LayoutResolver::new(dir.path().join("missing.html"));
        assert_matches!(resolver.load().await, Err(CoreError::Internal(_)));
    }
}
