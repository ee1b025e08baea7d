//! Application configuration
//!
//! Configuration is layered by [`ConfigLoader`]: built-in defaults, then a
//! TOML file, then `FLAGWALK__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ClientConfig, LoggingConfig};
