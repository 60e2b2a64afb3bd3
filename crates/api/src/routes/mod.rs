pub mod health;
pub mod templates;
pub mod uploads;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /templates                      list (GET)
/// /templates/{id}                 get, update (GET, PUT)
/// /uploadEmailConfig              create template (POST)
/// /getEmailLayout                 raw layout HTML (GET)
/// /renderAndDownloadTemplate      rendered HTML (POST)
/// /uploadImage                    multipart image upload (POST)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(templates::router())
        .merge(uploads::router(config.max_upload_bytes))
}
