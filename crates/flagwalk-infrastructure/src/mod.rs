//! # flagwalk infrastructure
//!
//! Cross-cutting technical concerns of the flagwalk CLI:
//!
//! - [`config`] - application configuration loaded through Figment
//! - [`logging`] - structured logging with tracing
//! - [`constants`] - file names, environment variables and defaults
//! - [`error_ext`] - context helpers that map foreign errors to domain errors

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ClientConfig, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
pub use logging::{init_logging, parse_log_level};
