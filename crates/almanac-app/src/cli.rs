//! `almanac` command-line arguments.

use almanac_core::window::CalendarView;
use almanac_service::occurrence::parse_timestamp;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use uuid::Uuid;

/// almanac: expand recurring event templates into occurrences
#[derive(Parser, Debug)]
#[command(name = "almanac")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Owner whose templates are queried
    pub owner_id: Uuid,

    #[command(subcommand)]
    pub range: RangeCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RangeCommand {
    /// Occurrences shown by a day, week or month view
    View {
        /// One of `day`, `week`, `month`
        view: CalendarView,
        /// Day the view is built around (YYYY-MM-DD), defaults to today in UTC
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Occurrences overlapping an explicit `[start, end)` window
    Window {
        /// RFC 3339 timestamp, date-time without offset, or bare date (UTC)
        #[arg(value_parser = parse_timestamp)]
        start: DateTime<Utc>,
        /// Exclusive end, same formats as `start`
        #[arg(value_parser = parse_timestamp)]
        end: DateTime<Utc>,
    },
}
