use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use uuid::Uuid;

use super::TemplateStore;
use crate::error::{DbError, DbResult};
use crate::model::EventTemplate;
use crate::query::TemplateQuery;

/// In-process template store keeping templates in insertion order.
#[derive(Debug)]
pub struct MemoryStore {
    templates: RwLock<Vec<EventTemplate>>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_templates(Vec::new())
    }

    #[must_use]
    pub fn with_templates(templates: Vec<EventTemplate>) -> Self {
        Self {
            templates: RwLock::new(templates),
            available: AtomicBool::new(true),
        }
    }

    /// ## Summary
    /// Builds a store from a JSON array of stored templates.
    ///
    /// ## Errors
    /// Returns [`DbError::SeedError`] if the JSON is not an array of templates.
    pub fn from_json(json: &str) -> DbResult<Self> {
        let templates: Vec<EventTemplate> = serde_json::from_str(json)?;
        tracing::debug!(template_count = templates.len(), "Seeded memory store");
        Ok(Self::with_templates(templates))
    }

    /// ## Summary
    /// Builds a store from a JSON seed file.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or does not hold an array of templates.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Reading template seed file");
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Marks the store as reachable or not. While unreachable every call fails
    /// with [`DbError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.templates.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.templates.read().await.is_empty()
    }

    fn ensure_available(&self) -> DbResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            tracing::warn!("Memory store marked unavailable");
            Err(DbError::Unavailable("memory store is offline".to_owned()))
        }
    }
}

impl TemplateStore for MemoryStore {
    async fn find_by_owner(
        &self,
        owner_id: Uuid,
        query: &TemplateQuery,
    ) -> DbResult<Vec<EventTemplate>> {
        self.ensure_available()?;
        let templates = self.templates.read().await;
        Ok(templates
            .iter()
            .filter(|t| t.owner_id == owner_id && query.matches(t))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid) -> DbResult<Option<EventTemplate>> {
        self.ensure_available()?;
        let templates = self.templates.read().await;
        Ok(templates
            .iter()
            .find(|t| t.id == id && t.owner_id == owner_id)
            .cloned())
    }

    async fn insert(&self, template: EventTemplate) -> DbResult<()> {
        self.ensure_available()?;
        self.templates.write().await.push(template);
        Ok(())
    }

    async fn replace(&self, template: EventTemplate) -> DbResult<bool> {
        self.ensure_available()?;
        let mut templates = self.templates.write().await;
        let Some(slot) = templates
            .iter_mut()
            .find(|t| t.id == template.id && t.owner_id == template.owner_id)
        else {
            return Ok(false);
        };
        *slot = template;
        Ok(true)
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> DbResult<bool> {
        self.ensure_available()?;
        let mut templates = self.templates.write().await;
        let before = templates.len();
        templates.retain(|t| !(t.id == id && t.owner_id == owner_id));
        Ok(templates.len() != before)
    }
}
