//! Store setup and dispatch of a parsed command to the occurrence queries.

use almanac_core::config::StoreConfig;
use almanac_db::model::Occurrence;
use almanac_db::store::{MemoryStore, TemplateStore};
use almanac_service::occurrence::{fetch_occurrences, fetch_view_occurrences};
use almanac_service::recurrence::ExpansionLimits;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::cli::RangeCommand;
use crate::error::AppResult;

/// ## Summary
/// Builds the template store from the configured seed file, or an empty one.
///
/// ## Errors
/// Returns an error if the seed file cannot be read or parsed.
pub async fn open_store(config: &StoreConfig) -> AppResult<MemoryStore> {
    let store = if let Some(path) = &config.seed_file {
        MemoryStore::from_seed_file(path).await?
    } else {
        tracing::warn!("No store.seed_file configured, starting with an empty store");
        MemoryStore::new()
    };
    tracing::info!(template_count = store.len().await, "Template store ready");
    Ok(store)
}

/// ## Summary
/// Runs the fetch selected on the command line. Views without an explicit
/// date are built around `today`.
///
/// ## Errors
/// Returns the service error of the underlying fetch.
#[tracing::instrument(skip(store))]
pub async fn run<S: TemplateStore>(
    store: &S,
    owner_id: Uuid,
    range: &RangeCommand,
    today: NaiveDate,
    limits: ExpansionLimits,
) -> AppResult<Vec<Occurrence>> {
    let occurrences = match *range {
        RangeCommand::View { view, date } => {
            fetch_view_occurrences(store, owner_id, view, date.unwrap_or(today), limits).await?
        }
        RangeCommand::Window { start, end } => {
            fetch_occurrences(store, owner_id, Some(start), Some(end), limits).await?
        }
    };
    Ok(occurrences)
}
