//! Domain layer constants

/// Separator between segments of a dot-notation path
pub const PATH_SEPARATOR: char = '.';

/// Pattern matching `{entry}` references inside string expressions
pub const STRING_REFERENCE_PATTERN: &str = r"\{([^{}]+)\}";
