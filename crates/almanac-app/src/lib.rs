//! Command-line front end: argument definitions, store setup and query
//! dispatch for the `almanac` binary.

pub mod cli;
pub mod error;
pub mod query;
