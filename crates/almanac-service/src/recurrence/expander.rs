use almanac_core::config::EngineConfig;
use almanac_db::model::{EventTemplate, Occurrence};
use chrono::{DateTime, TimeDelta, Utc};

use super::calendar::Step;
use crate::error::{ServiceError, ServiceResult};

/// Resource bounds applied to a single expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Maximum number of occurrences one template may produce. `None` is unbounded.
    pub max_occurrences: Option<u32>,
}

impl ExpansionLimits {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_occurrences: None,
        }
    }

    #[must_use]
    pub const fn capped(max_occurrences: u32) -> Self {
        Self {
            max_occurrences: Some(max_occurrences),
        }
    }

    fn check(self, produced: usize) -> ServiceResult<()> {
        let Some(limit) = self.max_occurrences else {
            return Ok(());
        };
        if !u32::try_from(produced).is_ok_and(|n| n < limit) {
            tracing::warn!(limit, "Occurrence limit reached during expansion");
            return Err(ServiceError::TooManyOccurrences { limit });
        }
        Ok(())
    }
}

impl From<&EngineConfig> for ExpansionLimits {
    fn from(config: &EngineConfig) -> Self {
        Self {
            max_occurrences: config.occurrence_cap(),
        }
    }
}

/// ## Summary
/// Produces every occurrence of `template` overlapping `[window_start, window_end)`,
/// ordered by start.
///
/// Candidates are anchored at the template's own `start`/`end` and advanced
/// one step at a time (a day, a week, or a calendar month with day overflow).
/// A candidate is kept when `end > window_start`; iteration stops once
/// `start >= window_end`. Templates that do not recur yield at most their own
/// interval. An inverted window is not special-cased: the same two
/// comparisons apply, so an interval straddling it is still kept.
///
/// The call is pure: repeated calls with the same arguments return equal sequences.
///
/// ## Errors
/// Returns [`ServiceError::TooManyOccurrences`] if the window holds more
/// occurrences than `limits` allows.
pub fn expand(
    template: &EventTemplate,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    limits: ExpansionLimits,
) -> ServiceResult<Vec<Occurrence>> {
    let step = Step::for_repeat(template.repeat);

    tracing::trace!(
        template_id = %template.id,
        repeat = %template.repeat,
        duration_seconds = template.duration().num_seconds(),
        %window_start,
        %window_end,
        "Expanding template"
    );

    let mut current_start = template.start;
    let mut current_end = template.end;

    if let Some(length) = step.and_then(Step::fixed_length) {
        let Some((start, end)) =
            skip_before_window(current_start, current_end, window_start, length)
        else {
            tracing::trace!(template_id = %template.id, "Window lies past the representable range");
            return Ok(Vec::new());
        };
        current_start = start;
        current_end = end;
    }

    let mut occurrences = Vec::new();
    while current_start < window_end {
        if current_end > window_start {
            limits.check(occurrences.len())?;
            occurrences.push(Occurrence::from_template(template, current_start, current_end));
        }

        let Some(step) = step else {
            break;
        };
        let (Some(next_start), Some(next_end)) = (step.advance(current_start), step.advance(current_end))
        else {
            tracing::trace!(template_id = %template.id, "Recurrence ran past the representable range");
            break;
        };
        current_start = next_start;
        current_end = next_end;
    }

    tracing::trace!(
        template_id = %template.id,
        occurrence_count = occurrences.len(),
        "Expansion finished"
    );
    Ok(occurrences)
}

/// Jumps a fixed-length sequence to its first candidate ending after
/// `window_start`. Every skipped candidate ends at or before the window and
/// would not have been emitted.
fn skip_before_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    window_start: DateTime<Utc>,
    length: TimeDelta,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    if end > window_start {
        return Some((start, end));
    }

    let gap_ms = window_start.signed_duration_since(end).num_milliseconds();
    let steps = gap_ms / length.num_milliseconds();
    let offset = TimeDelta::try_milliseconds(steps.checked_mul(length.num_milliseconds())?)?;

    let mut start = start.checked_add_signed(offset)?;
    let mut end = end.checked_add_signed(offset)?;
    while end <= window_start {
        start = start.checked_add_signed(length)?;
        end = end.checked_add_signed(length)?;
    }
    Some((start, end))
}
