//! # flagwalk
//!
//! Command-line option groups that depend on each other, wired by a graph
//! walk that shares one instance per group type within a command.
//!
//! ## Architecture
//!
//! - `domain` - the walker, node descriptors and error types
//! - `infrastructure` - configuration, logging and error context helpers
//! - [`flags`] - the option groups and their registry
//! - [`commands`] - the built-in commands
//! - [`cli`] - binding, parsing and running commands

pub mod cli;
pub mod commands;
pub mod flags;

/// Domain layer - graph walker and error types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use flagwalk_domain::*;
}

/// Infrastructure layer - config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use flagwalk_infrastructure::*;
}

pub use cli::{Application, GlobalArgs, Invocation, run};
pub use commands::{CliCommand, builtin_commands};
pub use flags::{ClientFlag, DatacenterFlag, FLAGS, Flag, flag_capability};
