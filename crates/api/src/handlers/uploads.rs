//! Handler for image uploads.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::ImageUploadResponse;
use crate::state::AppState;

/// Multipart field carrying the image.
const IMAGE_FIELD: &str = "image";

/// POST /api/uploadImage
///
/// Store the file sent in the `image` field and return its served path.
/// Any content type is accepted. Other fields are ignored.
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ImageUploadResponse>> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Upload without a multipart body");
        no_file()
    })?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        // A part without a filename is a plain text field, not a file.
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field.bytes().await?;

        let stored = state.images.store(&original_name, &data).await?;

        tracing::info!(
            filename = %stored.filename,
            size = data.len(),
            "Image uploaded",
        );

        return Ok(Json(ImageUploadResponse {
            image_url: stored.url,
        }));
    }

    Err(no_file())
}

fn no_file() -> AppError {
    AppError::BadRequest("No file uploaded".into())
}
