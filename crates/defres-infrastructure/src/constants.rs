//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `defres_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "defres.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "defres";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DEFRES";

/// Separator between prefix and nested configuration keys in env vars
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "DEFRES_LOG";

/// Maximum number of daily log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// Extension of rolled log files
pub const LOG_FILE_EXTENSION: &str = "log";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "defres";

// ============================================================================
// RESOLVER CONSTANTS
// ============================================================================

/// Whether lazy object definitions are constructed behind deferred handles
pub const DEFAULT_DEFERRED_OBJECTS: bool = true;
