//! Datacenter flag

use super::{ClientFlag, FLAGS, Flag};
use clap::{Arg, ArgMatches, value_parser};
use flagwalk_domain::{Error, Implementor, Node, Result, Shared, impl_node};
use flagwalk_infrastructure::AppConfig;
use flagwalk_infrastructure::constants::DATACENTER_ENV;
use linkme::distributed_slice;
use std::env;
use tracing::debug;

const DATACENTER_ARG: &str = "dc";

/// `--dc`: datacenter to operate in, resolved against the service client
#[derive(Debug, Default)]
pub struct DatacenterFlag {
    client: Option<Shared<ClientFlag>>,
    name: Option<String>,
}

impl_node!(DatacenterFlag {
    client: shared,
    name: value,
});

#[distributed_slice(FLAGS)]
static DATACENTER_FLAG: Implementor<dyn Flag> = Implementor::new::<DatacenterFlag>(view);

fn view(node: &mut dyn Node) -> Option<&mut dyn Flag> {
    node.downcast_mut::<DatacenterFlag>()
        .map(|flag| flag as &mut dyn Flag)
}

impl DatacenterFlag {
    /// Client this flag depends on, once wired
    pub fn client(&self) -> Option<&Shared<ClientFlag>> {
        self.client.as_ref()
    }

    /// Selected datacenter name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Inventory path of the datacenter, `/` when none is selected
    pub fn path(&self) -> String {
        match &self.name {
            Some(name) => format!("/{name}"),
            None => "/".to_string(),
        }
    }
}

impl Flag for DatacenterFlag {
    fn register(&mut self) -> Vec<Arg> {
        if let Ok(value) = env::var(DATACENTER_ENV) {
            self.name = Some(value).filter(|name| !name.is_empty());
        }

        vec![
            Arg::new(DATACENTER_ARG)
                .long("dc")
                .value_name("NAME")
                .value_parser(value_parser!(String))
                .help(format!("Datacenter [env: {DATACENTER_ENV}]")),
        ]
    }

    fn process(&mut self, matches: &ArgMatches, _config: &AppConfig) -> Result<()> {
        if let Some(value) = matches.get_one::<String>(DATACENTER_ARG) {
            self.name = Some(value.clone()).filter(|name| !name.is_empty());
        }

        let client = self
            .client
            .as_ref()
            .ok_or_else(|| Error::infrastructure("datacenter flag has no client"))?;
        if client.borrow().client().is_none() {
            return Err(Error::infrastructure(
                "datacenter flag processed before its client",
            ));
        }

        debug!(datacenter = %self.path(), "datacenter selected");
        Ok(())
    }
}
