use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Upload routes mounted at `/api`.
///
/// ```text
/// POST   /uploadImage   -> upload_image
/// ```
///
/// Only this route gets the raised body limit.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/uploadImage", post(uploads::upload_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
