//! Occurrence engine: recurrence expansion, window and search queries over
//! stored templates, and template management.

pub mod error;
pub mod occurrence;
pub mod recurrence;
pub mod template;
