//! Occurrence expansion for recurring templates.

mod calendar;
mod expander;


pub use calendar::add_months_overflowing;
pub use expander::{ExpansionLimits, expand};
