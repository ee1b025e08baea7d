//! Service client flag
//!
//! Holds the URL of the service every command talks to and, once the
//! command line is parsed, the HTTP client for it.

use super::{FLAGS, Flag};
use clap::{Arg, ArgMatches, value_parser};
use flagwalk_domain::{Error, Implementor, Node, Result, impl_node};
use flagwalk_infrastructure::constants::URL_ENV;
use flagwalk_infrastructure::{AppConfig, ErrorContext};
use linkme::distributed_slice;
use reqwest::{Client, Url};
use std::env;
use std::fmt;
use tracing::{debug, warn};

const URL_ARG: &str = "url";
const URL_DESCRIPTION: &str = "service URL";

/// `-u/--url`: the service endpoint and its client
#[derive(Debug, Default)]
pub struct ClientFlag {
    url: Option<Url>,
    client: Option<Client>,
}

impl_node!(ClientFlag {
    url: value,
    client: value,
});

#[distributed_slice(FLAGS)]
static CLIENT_FLAG: Implementor<dyn Flag> = Implementor::new::<ClientFlag>(view);

fn view(node: &mut dyn Node) -> Option<&mut dyn Flag> {
    node.downcast_mut::<ClientFlag>()
        .map(|flag| flag as &mut dyn Flag)
}

impl ClientFlag {
    /// Parse and store a URL; an empty value clears it
    pub fn set(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            self.url = None;
            return Ok(());
        }

        let url = Url::parse(value)
            .map_err(|e| Error::invalid_argument(format!("invalid {URL_DESCRIPTION}: {e}")))?;
        self.url = Some(url);
        Ok(())
    }

    /// Parsed URL, credentials included
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Client built by [`Flag::process`]
    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

impl fmt::Display for ClientFlag {
    /// The URL without user name and password; empty when unset
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(url) = &self.url else {
            return Ok(());
        };
        let mut public = url.clone();
        if !public.cannot_be_a_base() {
            public.set_username("").ok();
            public.set_password(None).ok();
        }
        write!(f, "{public}")
    }
}

impl Flag for ClientFlag {
    fn register(&mut self) -> Vec<Arg> {
        if let Ok(value) = env::var(URL_ENV) {
            if let Err(error) = self.set(&value) {
                warn!(env = URL_ENV, %error, "ignoring default URL");
            }
        }

        vec![
            Arg::new(URL_ARG)
                .short('u')
                .long("url")
                .value_name("URL")
                .value_parser(value_parser!(String))
                .help(format!("The {URL_DESCRIPTION} [env: {URL_ENV}]")),
        ]
    }

    fn process(&mut self, matches: &ArgMatches, config: &AppConfig) -> Result<()> {
        if let Some(value) = matches.get_one::<String>(URL_ARG) {
            self.set(value)?;
        }
        if self.url.is_none() {
            return Err(Error::missing_parameter(format!(
                "specify a {URL_DESCRIPTION} (-u or {URL_ENV})"
            )));
        }

        let client = Client::builder()
            .timeout(config.client.timeout())
            .user_agent(config.client.user_agent.clone())
            .build()
            .client_context("Failed to build the service client")?;
        debug!(url = %self, "service client ready");
        self.client = Some(client);
        Ok(())
    }
}
