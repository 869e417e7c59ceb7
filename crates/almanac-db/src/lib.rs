//! Event template storage: the stored model, the storage predicate and the
//! store collaborator interface.

pub mod error;
pub mod model;
pub mod query;
pub mod store;
