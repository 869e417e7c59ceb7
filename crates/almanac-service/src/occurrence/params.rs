//! Query inputs for window fetches and searches, in raw and typed form.

use almanac_core::types::Category;
use almanac_core::window::TimeWindow;
use almanac_db::query::TemplateQuery;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Parses a timestamp as sent by API clients.
///
/// Accepts RFC 3339 (`2024-01-08T09:00:00Z`, `2024-01-08T10:00:00+01:00`),
/// a date-time without offset (`2024-01-08T09:00`, seconds and fractions
/// optional) read as UTC, or a bare date (`2024-01-08`) read as UTC midnight.
///
/// ## Errors
/// Returns [`ServiceError::ParseError`] for any other input.
pub fn parse_timestamp(value: &str) -> ServiceResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(ServiceError::ParseError(format!("invalid timestamp: {value:?}")))
}

/// Treats missing and empty parameters alike.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Raw window bounds of a plain fetch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl WindowParams {
    /// ## Summary
    /// Resolves both bounds into a window.
    ///
    /// ## Errors
    /// Returns [`ServiceError::MissingWindowBound`] if either bound is absent,
    /// or [`ServiceError::ParseError`] if one does not parse.
    pub fn resolve(&self) -> ServiceResult<TimeWindow> {
        let start = present(self.start.as_ref()).ok_or(ServiceError::MissingWindowBound("start"))?;
        let end = present(self.end.as_ref()).ok_or(ServiceError::MissingWindowBound("end"))?;
        Ok(TimeWindow::new(parse_timestamp(start)?, parse_timestamp(end)?))
    }
}

/// Raw search parameters as they arrive from the API layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub text: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub color: Option<String>,
    pub category: Option<String>,
    pub upcoming: Option<String>,
}

/// Typed search filters. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub text: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub category: Option<Category>,
    /// `Some(true)`: only templates starting at or after now.
    /// `Some(false)`: only templates that ended before now.
    pub upcoming: Option<bool>,
}

impl TryFrom<&SearchParams> for SearchFilters {
    type Error = ServiceError;

    fn try_from(params: &SearchParams) -> ServiceResult<Self> {
        let category = present(params.category.as_ref())
            .map(|raw| {
                raw.parse::<Category>()
                    .map_err(|err| ServiceError::ValidationError(err.to_string()))
            })
            .transpose()?;

        let upcoming = match present(params.upcoming.as_ref()) {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        };

        Ok(Self {
            text: present(params.text.as_ref()).map(str::to_owned),
            start_date: present(params.start_date.as_ref()).map(parse_timestamp).transpose()?,
            end_date: present(params.end_date.as_ref()).map(parse_timestamp).transpose()?,
            color: present(params.color.as_ref()).map(str::to_owned),
            category,
            upcoming,
        })
    }
}

impl SearchFilters {
    /// ## Summary
    /// Builds the storage predicate for this search.
    ///
    /// Date bounds constrain the template's `start` only. `upcoming` replaces
    /// any date bound: `true` keeps templates starting at or after `now`,
    /// `false` keeps templates whose `end` is before `now`.
    #[must_use]
    pub fn to_query(&self, now: DateTime<Utc>) -> TemplateQuery {
        let mut query = TemplateQuery::new();

        if let Some(text) = &self.text {
            query = query.with_text(text);
        }

        query.start_at_or_after = self.start_date;
        query.start_at_or_before = self.end_date;

        if let Some(color) = &self.color {
            query = query.with_color(color.clone());
        }
        if let Some(category) = self.category {
            query = query.with_category(category);
        }

        match self.upcoming {
            Some(true) => {
                query.start_at_or_after = Some(now);
                query.start_at_or_before = None;
            }
            Some(false) => {
                query.start_at_or_after = None;
                query.start_at_or_before = None;
                query.end_before = Some(now);
            }
            None => {}
        }

        query
    }

    /// Window used to expand recurring templates. Only a complete date range
    /// gives one.
    #[must_use]
    pub fn expansion_window(&self) -> Option<TimeWindow> {
        Some(TimeWindow::new(self.start_date?, self.end_date?))
    }
}
