use almanac_core::types::Repeat;
use almanac_db::model::Occurrence;
use almanac_db::store::TemplateStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::params::SearchFilters;
use crate::error::ServiceResult;
use crate::recurrence::{ExpansionLimits, expand};

/// ## Summary
/// Searches the owner's templates and returns their occurrences, templates
/// ordered by start.
///
/// Recurring templates are expanded only when both `start_date` and
/// `end_date` are given, over exactly that range. With an incomplete range a
/// recurring template is returned once, as its own interval. Single events are
/// always returned as their own interval.
///
/// `now` anchors the `upcoming` filter.
///
/// ## Side Effects
/// Reads templates from the store.
///
/// ## Errors
/// Returns a storage error if the store fails, or
/// [`ServiceError::TooManyOccurrences`](crate::error::ServiceError::TooManyOccurrences)
/// if an expansion exceeds `limits`.
#[tracing::instrument(skip(store))]
pub async fn search_occurrences<S: TemplateStore>(
    store: &S,
    owner_id: Uuid,
    filters: &SearchFilters,
    now: DateTime<Utc>,
    limits: ExpansionLimits,
) -> ServiceResult<Vec<Occurrence>> {
    let mut templates = store.find_by_owner(owner_id, &filters.to_query(now)).await?;
    templates.sort_by_key(|template| template.start);

    let expansion_window = filters.expansion_window();
    tracing::debug!(
        template_count = templates.len(),
        expands = expansion_window.is_some(),
        "Fetched search candidates"
    );

    let mut occurrences = Vec::with_capacity(templates.len());
    for template in &templates {
        match expansion_window {
            Some(window) if template.repeat != Repeat::None => {
                occurrences.extend(expand(template, window.start, window.end, limits)?);
            }
            _ => occurrences.push(template.as_occurrence()),
        }
    }

    tracing::debug!(occurrence_count = occurrences.len(), "Search complete");
    Ok(occurrences)
}
