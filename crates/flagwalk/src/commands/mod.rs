//! Built-in commands
//!
//! A command is a node whose fields are the option groups it needs. The
//! runner binds and processes those groups before [`CliCommand::run`] is
//! called, so every shared slot is populated by then.

pub mod datacenter;
pub mod url;

pub use datacenter::DatacenterCommand;
pub use url::UrlCommand;

use flagwalk_domain::{Error, Node, Result, Shared};
use std::io::Write;

/// A subcommand of the `flagwalk` binary
pub trait CliCommand: Node {
    /// Subcommand name
    fn name(&self) -> &'static str;

    /// One-line help text
    fn about(&self) -> &'static str;

    /// Execute the command, writing its output to `out`
    fn run(&mut self, out: &mut dyn Write) -> Result<()>;
}

/// Every command the binary ships with
pub fn builtin_commands() -> Vec<Box<dyn CliCommand>> {
    vec![
        Box::new(UrlCommand::default()),
        Box::new(DatacenterCommand::default()),
    ]
}

/// Borrow a slot the walker should have populated
pub(crate) fn wired<'a, T>(slot: &'a Option<Shared<T>>, field: &str) -> Result<&'a Shared<T>> {
    slot.as_ref()
        .ok_or_else(|| Error::infrastructure(format!("option group \"{field}\" was never bound")))
}
