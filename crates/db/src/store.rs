//! The template store seam used by the service.
//!
//! [`PgTemplateStore`] delegates to [`TemplateRepo`]. [`MemoryTemplateStore`]
//! keeps records in process and follows the same ordering and shallow
//! update rules; tests and `STORE_BACKEND=memory` use it.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use ebuilder_core::types::DbId;
use sqlx::types::Json;
use tokio::sync::RwLock;

use crate::models::template::{CreateTemplate, Template, UpdateTemplate};
use crate::repositories::TemplateRepo;
use crate::DbPool;

/// Errors raised by a [`TemplateStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The PostgreSQL backend failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store cannot be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence operations over the flat template collection.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// All templates ordered by `created_at` descending.
    async fn list(&self) -> Result<Vec<Template>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Template>, StoreError>;

    /// Persist a new template with a fresh id and the current timestamp.
    async fn create(&self, input: &CreateTemplate) -> Result<Template, StoreError>;

    /// Overwrite the present top-level fields. `Ok(None)` if `id` does not exist.
    async fn update(
        &self,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, StoreError>;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct PgTemplateStore {
    pool: DbPool,
}

impl PgTemplateStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateStore for PgTemplateStore {
    async fn list(&self) -> Result<Vec<Template>, StoreError> {
        Ok(TemplateRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Template>, StoreError> {
        Ok(TemplateRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, input: &CreateTemplate) -> Result<Template, StoreError> {
        Ok(TemplateRepo::create(&self.pool, input).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, StoreError> {
        Ok(TemplateRepo::update(&self.pool, id, input).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct MemoryTemplateStore {
    records: RwLock<Vec<Template>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
            unavailable: AtomicBool::new(false),
        }
    }
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store marked unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn list(&self) -> Result<Vec<Template>, StoreError> {
        self.check_available()?;
        let mut all = self.records.read().await.clone();
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(all)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Template>, StoreError> {
        self.check_available()?;
        let records = self.records.read().await;
        Ok(records.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, input: &CreateTemplate) -> Result<Template, StoreError> {
        self.check_available()?;
        let template = Template {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: input.title.clone(),
            content: input.content.clone(),
            image_url: input.image_url.clone(),
            styles: Json(input.styles.clone().unwrap_or_default()),
            created_at: chrono::Utc::now(),
        };
        self.records.write().await.push(template.clone());
        Ok(template)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, StoreError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        let Some(existing) = records.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            existing.title = title.clone();
        }
        if let Some(content) = &input.content {
            existing.content = content.clone();
        }
        if let Some(image_url) = &input.image_url {
            existing.image_url = image_url.clone();
        }
        if let Some(styles) = &input.styles {
            existing.styles = Json(styles.clone().unwrap_or_default());
        }

        Ok(Some(existing.clone()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use ebuilder_core::template::{Alignment, TemplateStyles};

    use super::*;

    fn create_input(title: &str) -> CreateTemplate {
        CreateTemplate {
            title: Some(title.into()),
            content: Some("body".into()),
            image_url: None,
            styles: Some(TemplateStyles {
                title_color: Some("#112233".into()),
                content_color: Some("#000000".into()),
                font_size: Some("20px".into()),
                alignment: Some(Alignment::Center),
            }),
        }
    }

    #[tokio::test]
    async fn create_then_find_round_trips_fields() {
        let store = MemoryTemplateStore::new();
        let input = create_input("Hello");
        let created = store.create(&input).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.title.as_deref(), Some("Hello"));
        assert_eq!(found.image_url, None);
        assert_eq!(Some(found.styles.0), input.styles);
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let store = MemoryTemplateStore::new();
        let a = store.create(&CreateTemplate::default()).await.unwrap();
        let b = store.create(&CreateTemplate::default()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryTemplateStore::new();
        for title in ["first", "second", "third"] {
            store.create(&create_input(title)).await.unwrap();
        }

        let all = store.list().await.unwrap();
        let titles: Vec<_> = all.iter().map(|t| t.title.as_deref().unwrap()).collect();
        assert_eq!(titles, ["third", "second", "first"]);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn update_replaces_styles_without_merging() {
        let store = MemoryTemplateStore::new();
        let created = store.create(&create_input("Styled")).await.unwrap();

        let patch = UpdateTemplate {
            styles: Some(Some(TemplateStyles {
                title_color: Some("#ff0000".into()),
                ..Default::default()
            })),
            ..Default::default()
        };
        let updated = store.update(created.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.title.as_deref(), Some("Styled"));
        assert_eq!(updated.styles.title_color.as_deref(), Some("#ff0000"));
        assert_eq!(updated.styles.font_size, None);
        assert_eq!(updated.styles.alignment, None);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_with_null_clears_fields() {
        let store = MemoryTemplateStore::new();
        let created = store.create(&create_input("Clear me")).await.unwrap();

        let patch = UpdateTemplate {
            title: Some(None),
            styles: Some(None),
            ..Default::default()
        };
        let updated = store.update(created.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.title, None);
        assert_eq!(updated.content.as_deref(), Some("body"));
        assert_eq!(updated.styles.0, TemplateStyles::default());
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let store = MemoryTemplateStore::new();
        let result = store.update(99, &UpdateTemplate::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = MemoryTemplateStore::new();
        store.set_unavailable(true);
        assert_matches!(store.list().await, Err(StoreError::Unavailable(_)));
        assert_matches!(store.ping().await, Err(StoreError::Unavailable(_)));

        store.set_unavailable(false);
        assert!(store.list().await.unwrap().is_empty());
    }
}
