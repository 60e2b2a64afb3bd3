//! Handlers for the email layout and template rendering.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use ebuilder_core::render::render_template as render;
use ebuilder_core::template::TemplatePayload;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Body of `POST /api/renderAndDownloadTemplate`.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub template: TemplatePayload,
}

/// GET /api/getEmailLayout
///
/// Return the layout file as-is.
pub async fn get_email_layout(State(state): State<AppState>) -> AppResult<Html<String>> {
    let layout = state.layout.load().await?;
    Ok(Html(layout))
}

/// POST /api/renderAndDownloadTemplate
///
/// Substitute the template's title, content and image URL into the layout.
/// The template does not need to be persisted.
pub async fn render_template(
    State(state): State<AppState>,
    body: Result<Json<RenderRequest>, JsonRejection>,
) -> AppResult<Html<String>> {
    let Json(body) = body?;
    let layout = state.layout.load().await?;
    let html = render(&layout, &body.template);

    tracing::debug!(bytes = html.len(), "Rendered template");

    Ok(Html(html))
}
