//! Option groups
//!
//! An option group ("flag") contributes command-line arguments to every
//! command that declares a field of its type. Flags register themselves in
//! the [`FLAGS`] distributed slice; [`flag_capability`] turns that slice into
//! the capability the walker shares instances by, so a flag needed by several
//! groups of one command is bound and finalized exactly once.
//!
//! ```text
//! DatacenterCommand
//! ├── client: ClientFlag ◄─────┐ same instance
//! └── datacenter: DatacenterFlag
//!     └── client: ClientFlag ──┘
//! ```

pub mod client;
pub mod datacenter;

pub use client::ClientFlag;
pub use datacenter::DatacenterFlag;

use clap::{Arg, ArgMatches};
use flagwalk_domain::{Capability, Implementor, Node, Result};
use flagwalk_infrastructure::AppConfig;
use linkme::distributed_slice;

/// A command-line option group
pub trait Flag: Node {
    /// Arguments this group adds to a command
    ///
    /// Environment defaults are read here, before the arguments exist.
    fn register(&mut self) -> Vec<Arg>;

    /// Finalize the group after the command line was parsed
    fn process(&mut self, matches: &ArgMatches, config: &AppConfig) -> Result<()>;
}

/// Registry of every flag type, filled at link time
#[distributed_slice]
pub static FLAGS: [Implementor<dyn Flag>] = [..];

/// Capability describing every registered flag type
pub fn flag_capability() -> Capability<dyn Flag> {
    Capability::from_entries("flag", &FLAGS)
}
