/// Display color given to templates created without one.
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Default cap on occurrences produced by a single expansion.
pub const DEFAULT_MAX_OCCURRENCES: u32 = 10_000;

/// Days advanced by one weekly step.
pub const DAYS_PER_WEEK: u64 = 7;
