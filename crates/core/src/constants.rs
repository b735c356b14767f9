/// Maximum length of a goal description, in characters.
pub const GOAL_TEXT_MAX_CHARS: usize = 500;

/// Minimum length of a goal description, in characters.
pub const GOAL_TEXT_MIN_CHARS: usize = 1;

/// Storage format for timestamps (UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
