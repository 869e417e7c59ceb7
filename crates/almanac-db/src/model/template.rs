use almanac_core::constants::DEFAULT_COLOR;
use almanac_core::error::{CoreError, CoreResult};
use almanac_core::types::{Category, Repeat};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::occurrence::Occurrence;

/// Stored definition of an event series, or of a single event when
/// `repeat` is [`Repeat::None`].
///
/// `start`/`end` describe the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub repeat: Repeat,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_owned()
}

/// Input for creating a template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventTemplate {
    pub title: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub color: Option<String>,
    pub category: Option<Category>,
    pub repeat: Option<Repeat>,
}

/// Partial update of a template. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub category: Option<Category>,
    pub repeat: Option<Repeat>,
}

impl EventTemplate {
    /// ## Summary
    /// Builds a new template for `owner_id`, filling defaults and trimming text fields.
    ///
    /// ## Errors
    /// Returns [`CoreError::ValidationError`] if the title is empty after trimming.
    pub fn create(owner_id: Uuid, new: NewEventTemplate, now: DateTime<Utc>) -> CoreResult<Self> {
        let NewEventTemplate {
            title,
            description,
            start,
            end,
            color,
            category,
            repeat,
        } = new;

        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            title: normalize_title(&title)?,
            description: description.as_deref().map(str::trim).unwrap_or_default().to_owned(),
            start,
            end,
            color: color.filter(|c| !c.is_empty()).unwrap_or_else(default_color),
            category: category.unwrap_or_default(),
            repeat: repeat.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// ## Summary
    /// Applies the present fields of `changes` and bumps `updated_at`.
    ///
    /// ## Errors
    /// Returns [`CoreError::ValidationError`] if a new title is empty after trimming.
    /// The template is left unchanged on error.
    pub fn apply(&mut self, changes: TemplateChanges, now: DateTime<Utc>) -> CoreResult<()> {
        let title = changes.title.as_deref().map(normalize_title).transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description.trim().to_owned();
        }
        if let Some(start) = changes.start {
            self.start = start;
        }
        if let Some(end) = changes.end {
            self.end = end;
        }
        if let Some(color) = changes.color {
            self.color = color;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(repeat) = changes.repeat {
            self.repeat = repeat;
        }
        self.updated_at = now;
        Ok(())
    }

    /// The template's own interval as a single, unexpanded occurrence.
    #[must_use]
    pub fn as_occurrence(&self) -> Occurrence {
        Occurrence::from_template(self, self.start, self.end)
    }

    /// Signed length of the first occurrence. Negative when `end` precedes `start`.
    #[must_use]
    pub fn duration(&self) -> chrono::TimeDelta {
        self.end.signed_duration_since(self.start)
    }
}

fn normalize_title(title: &str) -> CoreResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::ValidationError("title must not be empty".to_owned()));
    }
    Ok(trimmed.to_owned())
}
