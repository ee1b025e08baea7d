//! `flagwalk datacenter`

use super::{CliCommand, wired};
use crate::flags::{ClientFlag, DatacenterFlag};
use flagwalk_domain::{Result, Shared, impl_node};
use std::io::Write;

/// Print the service URL and the selected datacenter path
///
/// Declares the client directly and again through the datacenter flag;
/// both resolve to one instance.
#[derive(Debug, Default)]
pub struct DatacenterCommand {
    client: Option<Shared<ClientFlag>>,
    datacenter: Option<Shared<DatacenterFlag>>,
}

impl_node!(DatacenterCommand {
    client: shared,
    datacenter: shared,
});

impl DatacenterCommand {
    /// Bound client flag
    pub fn client(&self) -> Option<&Shared<ClientFlag>> {
        self.client.as_ref()
    }

    /// Bound datacenter flag
    pub fn datacenter(&self) -> Option<&Shared<DatacenterFlag>> {
        self.datacenter.as_ref()
    }
}

impl CliCommand for DatacenterCommand {
    fn name(&self) -> &'static str {
        "datacenter"
    }

    fn about(&self) -> &'static str {
        "Print the service URL and datacenter path"
    }

    fn run(&mut self, out: &mut dyn Write) -> Result<()> {
        let client = wired(&self.client, "client")?;
        let datacenter = wired(&self.datacenter, "datacenter")?;
        writeln!(out, "{} {}", client.borrow(), datacenter.borrow().path())?;
        Ok(())
    }
}
