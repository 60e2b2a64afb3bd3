//! Handlers for template CRUD.
//!
//! Templates are never deleted through the API. Update replaces the
//! top-level fields present in the body (`null` clears one) and answers `null` when the id is
//! unknown.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use ebuilder_core::error::CoreError;
use ebuilder_core::types::parse_id;
use ebuilder_db::models::template::{CreateTemplate, Template, UpdateTemplate};

use crate::error::{AppError, AppResult};
use crate::response::SaveResponse;
use crate::state::AppState;

/// GET /api/templates
///
/// List every template, newest first.
pub async fn list_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = state.store.list().await?;

    Ok(Json(templates))
}

/// GET /api/templates/{id}
///
/// Malformed ids are reported the same way as unknown ones.
pub async fn get_template(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: raw_id.clone(),
        })
    };

    let id = parse_id(&raw_id).ok_or_else(not_found)?;
    let template = state.store.find_by_id(id).await?.ok_or_else(not_found)?;

    Ok(Json(template))
}

/// PUT /api/templates/{id}
pub async fn update_template(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateTemplate>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;

    let Some(id) = parse_id(&raw_id) else {
        tracing::debug!(raw_id, "Update for malformed template id");
        return Ok(Json(None::<Template>));
    };

    let template = state.store.update(id, &input).await?;

    match &template {
        Some(_) => tracing::info!(template_id = id, "Template updated"),
        None => tracing::debug!(template_id = id, "Update for unknown template id"),
    }

    Ok(Json(template))
}

/// POST /api/uploadEmailConfig
///
/// Persist a new template from any subset of fields.
pub async fn create_template(
    State(state): State<AppState>,
    body: Result<Json<CreateTemplate>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let template = state.store.create(&input).await?;

    tracing::info!(template_id = template.id, "Template created");

    Ok(Json(SaveResponse {
        success: true,
        template,
    }))
}
