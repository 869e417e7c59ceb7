//! Window and search queries that turn stored templates into occurrences.

mod fetch;
mod params;
mod search;


pub use fetch::{fetch_occurrences, fetch_view_occurrences};
pub use params::{SearchFilters, SearchParams, WindowParams, parse_timestamp};
pub use search::search_occurrences;
