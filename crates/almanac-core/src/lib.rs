//! Shared building blocks for the almanac workspace: configuration, the core
//! error type, closed enums and half-open time windows.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod window;
