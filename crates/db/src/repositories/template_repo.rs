//! Repository for the `templates` table.

use ebuilder_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::template::{CreateTemplate, Template, UpdateTemplate};

const COLUMNS: &str = "id, title, content, image_url, styles, created_at";

/// Provides CRUD operations for templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template, returning the created row.
    ///
    /// `id` and `created_at` are assigned by the database.
    pub async fn create(pool: &PgPool, input: &CreateTemplate) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates (title, content, image_url, styles) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image_url)
            .bind(Json(input.styles.clone().unwrap_or_default()))
            .fetch_one(pool)
            .await
    }

    /// Find a template by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every template, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Template>(&query).fetch_all(pool).await
    }

    /// Update a template. Each present field replaces the stored value, a
    /// present `null` clears it, and a present `styles` replaces the stored
    /// object as a whole.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "UPDATE templates SET \
                title = CASE WHEN $2 THEN $3 ELSE title END, \
                content = CASE WHEN $4 THEN $5 ELSE content END, \
                image_url = CASE WHEN $6 THEN $7 ELSE image_url END, \
                styles = CASE WHEN $8 THEN $9 ELSE styles END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(input.title.clone().flatten())
            .bind(input.content.is_some())
            .bind(input.content.clone().flatten())
            .bind(input.image_url.is_some())
            .bind(input.image_url.clone().flatten())
            .bind(input.styles.is_some())
            .bind(Json(input.styles.clone().flatten().unwrap_or_default()))
            .fetch_optional(pool)
            .await
    }
}
