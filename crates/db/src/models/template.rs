//! Template model and DTOs.

use ebuilder_core::template::TemplateStyles;
use ebuilder_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `templates` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: DbId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub styles: Json<TemplateStyles>,
    pub created_at: Timestamp,
}

/// DTO for creating a new template. Any subset of fields may be given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub styles: Option<TemplateStyles>,
}

/// DTO for updating an existing template.
///
/// Each field has three states: absent (`None`) keeps the stored value,
/// `null` (`Some(None)`) clears it, and a value replaces it. `styles` is
/// replaced wholesale, never merged; a `null` resets it to `{}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplate {
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub styles: Option<Option<TemplateStyles>>,
}

/// Only called for fields present in the input, so `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
