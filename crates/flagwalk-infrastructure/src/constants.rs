//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "flagwalk.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "flagwalk";

/// Environment variable prefix for configuration (`FLAGWALK__LOGGING__LEVEL`)
pub const CONFIG_ENV_PREFIX: &str = "FLAGWALK";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding a tracing filter that overrides the level
pub const LOG_FILTER_ENV: &str = "FLAGWALK_LOG";

// ============================================================================
// FLAG CONSTANTS
// ============================================================================

/// Environment variable read for the default service URL
pub const URL_ENV: &str = "FLAGWALK_URL";

/// Environment variable read for the default datacenter
pub const DATACENTER_ENV: &str = "FLAGWALK_DATACENTER";

// ============================================================================
// CLIENT CONSTANTS
// ============================================================================

/// Default request timeout for the service client
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 30;

/// Default user agent sent by the service client
pub const DEFAULT_USER_AGENT: &str = concat!("flagwalk/", env!("CARGO_PKG_VERSION"));
