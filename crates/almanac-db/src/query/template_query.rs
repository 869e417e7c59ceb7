//! Predicate handed to [`TemplateStore::find_by_owner`](crate::store::TemplateStore::find_by_owner).

use almanac_core::types::Category;
use almanac_core::window::TimeWindow;
use chrono::{DateTime, Utc};

use super::text_match::FoldedNeedle;
use crate::model::EventTemplate;

/// Conjunction of optional template predicates.
///
/// An empty query matches every template of the owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateQuery {
    /// Coarse overlap test against the template's own interval only.
    pub overlapping: Option<TimeWindow>,
    /// Case-insensitive substring of `title` or `description`.
    pub text: Option<FoldedNeedle>,
    pub start_at_or_after: Option<DateTime<Utc>>,
    pub start_at_or_before: Option<DateTime<Utc>>,
    pub end_before: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub category: Option<Category>,
}

impl TemplateQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Query used by the plain window fetch.
    #[must_use]
    pub fn overlapping(window: TimeWindow) -> Self {
        Self {
            overlapping: Some(window),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(FoldedNeedle::new(text));
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// ## Summary
    /// Evaluates every present predicate against `template`.
    #[must_use]
    pub fn matches(&self, template: &EventTemplate) -> bool {
        if let Some(window) = &self.overlapping
            && !window.overlaps(template.start, template.end)
        {
            return false;
        }

        if let Some(needle) = &self.text
            && !(needle.is_contained_in(&template.title)
                || needle.is_contained_in(&template.description))
        {
            return false;
        }

        if self.start_at_or_after.is_some_and(|bound| template.start < bound) {
            return false;
        }
        if self.start_at_or_before.is_some_and(|bound| template.start > bound) {
            return false;
        }
        if self.end_before.is_some_and(|bound| template.end >= bound) {
            return false;
        }

        if self.color.as_deref().is_some_and(|color| template.color != color) {
            return false;
        }
        if self.category.is_some_and(|category| template.category != category) {
            return false;
        }

        true
    }
}
