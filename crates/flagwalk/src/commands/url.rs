//! `flagwalk url`

use super::{CliCommand, wired};
use crate::flags::ClientFlag;
use flagwalk_domain::{Result, Shared, impl_node};
use std::io::Write;

/// Print the service URL without credentials
#[derive(Debug, Default)]
pub struct UrlCommand {
    client: Option<Shared<ClientFlag>>,
}

impl_node!(UrlCommand { client: shared });

impl UrlCommand {
    /// Bound client flag
    pub fn client(&self) -> Option<&Shared<ClientFlag>> {
        self.client.as_ref()
    }
}

impl CliCommand for UrlCommand {
    fn name(&self) -> &'static str {
        "url"
    }

    fn about(&self) -> &'static str {
        "Print the service URL"
    }

    fn run(&mut self, out: &mut dyn Write) -> Result<()> {
        let client = wired(&self.client, "client")?;
        writeln!(out, "{}", client.borrow())?;
        Ok(())
    }
}
