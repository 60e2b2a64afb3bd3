use std::sync::Arc;

use ebuilder_core::layout::LayoutResolver;
use ebuilder_core::storage::ImageStorage;
use ebuilder_db::TemplateStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Template document store.
    pub store: Arc<dyn TemplateStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Loader for the static email layout.
    pub layout: LayoutResolver,
    /// Uploaded image directory.
    pub images: ImageStorage,
}

impl AppState {
    pub fn new(store: Arc<dyn TemplateStore>, config: ServerConfig) -> Self {
        Self {
            store,
            layout: LayoutResolver::new(config.layout_path.clone()),
            images: ImageStorage::new(config.upload_dir.clone()),
            config: Arc::new(config),
        }
    }
}
