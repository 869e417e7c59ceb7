use almanac_core::types::{Category, Repeat};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::template::EventTemplate;

/// One concrete instance of a template's interval. Computed per query, never stored.
///
/// Occurrences of the same template share the template's `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: String,
    pub category: Category,
    pub repeat: Repeat,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Occurrence {
    /// Projects `template` onto the interval `[start, end)`.
    #[must_use]
    pub fn from_template(template: &EventTemplate, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: template.id,
            owner_id: template.owner_id,
            title: template.title.clone(),
            description: template.description.clone(),
            start,
            end,
            color: template.color.clone(),
            category: template.category,
            repeat: template.repeat,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }

    #[must_use]
    pub fn duration(&self) -> chrono::TimeDelta {
        self.end.signed_duration_since(self.start)
    }
}
