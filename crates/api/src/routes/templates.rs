//! Route definitions for templates, layout and rendering.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{layout, templates};
use crate::state::AppState;

/// Template routes mounted at `/api`.
///
/// ```text
/// GET    /templates                   -> list_templates
/// GET    /templates/{id}              -> get_template
/// PUT    /templates/{id}              -> update_template
/// POST   /uploadEmailConfig           -> create_template
/// GET    /getEmailLayout              -> get_email_layout
/// POST   /renderAndDownloadTemplate   -> render_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(templates::list_templates))
        .route(
            "/templates/{id}",
            get(templates::get_template).put(templates::update_template),
        )
        .route("/uploadEmailConfig", post(templates::create_template))
        .route("/getEmailLayout", get(layout::get_email_layout))
        .route("/renderAndDownloadTemplate", post(layout::render_template))
}
