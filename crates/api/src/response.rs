//! Response bodies shared by the API handlers.
//!
//! The template endpoints return records unwrapped; only create and upload
//! carry a small envelope.

use ebuilder_db::models::template::Template;
use serde::Serialize;

/// Body of `POST /api/uploadEmailConfig`.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub template: Template,
}

/// Body of `POST /api/uploadImage`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    pub image_url: String,
}
