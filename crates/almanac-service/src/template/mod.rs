//! Creation, lookup, update and deletion of stored templates.

mod service;

pub use service::{create_template, delete_template, get_template, update_template};
