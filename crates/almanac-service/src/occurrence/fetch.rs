use almanac_core::types::Repeat;
use almanac_core::window::{CalendarView, TimeWindow};
use almanac_db::model::Occurrence;
use almanac_db::query::TemplateQuery;
use almanac_db::store::TemplateStore;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::recurrence::{ExpansionLimits, expand};

/// ## Summary
/// Returns the owner's occurrences overlapping `[window_start, window_end)`.
///
/// Storage pre-filters templates by their own interval only, so a recurring
/// template whose first occurrence lies outside the window is not considered
/// even if later occurrences fall inside it. Single events from storage are
/// emitted as-is; every other template is expanded over the window.
/// Occurrences keep storage order across templates and start order within one.
///
/// ## Side Effects
/// Reads templates from the store.
///
/// ## Errors
/// Returns [`ServiceError::MissingWindowBound`] if either bound is absent
/// (the store is not consulted), a storage error if the store fails, or
/// [`ServiceError::TooManyOccurrences`] if an expansion exceeds `limits`.
#[tracing::instrument(skip(store))]
pub async fn fetch_occurrences<S: TemplateStore>(
    store: &S,
    owner_id: Uuid,
    window_start: Option<DateTime<Utc>>,
    window_end: Option<DateTime<Utc>>,
    limits: ExpansionLimits,
) -> ServiceResult<Vec<Occurrence>> {
    let window_start = window_start.ok_or(ServiceError::MissingWindowBound("start"))?;
    let window_end = window_end.ok_or(ServiceError::MissingWindowBound("end"))?;
    let window = TimeWindow::new(window_start, window_end);

    let templates = store
        .find_by_owner(owner_id, &TemplateQuery::overlapping(window))
        .await?;
    tracing::debug!(template_count = templates.len(), %window, "Fetched candidate templates");

    let mut occurrences = Vec::with_capacity(templates.len());
    for template in &templates {
        if template.repeat == Repeat::None {
            occurrences.push(template.as_occurrence());
        } else {
            occurrences.extend(expand(template, window.start, window.end, limits)?);
        }
    }

    tracing::debug!(occurrence_count = occurrences.len(), "Window fetch complete");
    Ok(occurrences)
}

/// ## Summary
/// Fetches the occurrences shown by a day, week or month view around `date`.
///
/// ## Errors
/// Returns an error if the view window is out of range or the fetch fails.
#[tracing::instrument(skip(store))]
pub async fn fetch_view_occurrences<S: TemplateStore>(
    store: &S,
    owner_id: Uuid,
    view: CalendarView,
    date: NaiveDate,
    limits: ExpansionLimits,
) -> ServiceResult<Vec<Occurrence>> {
    let window = TimeWindow::for_view(view, date)?;
    fetch_occurrences(store, owner_id, Some(window.start), Some(window.end), limits).await
}
