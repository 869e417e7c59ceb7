//! almanac integration test support.
//!
//! Re-exports the workspace crates so integration tests can reach everything
//! through one dependency, and locates the shared fixtures.

use std::path::PathBuf;

pub use almanac_core as core;
pub use almanac_db as db;
pub use almanac_service as service;

/// Path of a file under `tests/fixtures`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
