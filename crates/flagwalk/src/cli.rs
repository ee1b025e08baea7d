//! Command-line runner
//!
//! Commands are walked twice with the flag capability. The first walk, in
//! [`Application::with_commands`], collects the arguments of every option
//! group into the clap command tree. The second, in
//! [`Invocation::execute`], finalizes the groups from the parsed matches.
//! Both walks see the same instances, so a group shared by several others
//! registers its arguments once and is processed once.

use crate::commands::{CliCommand, builtin_commands};
use crate::flags::{Flag, flag_capability};
use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use flagwalk_domain::{Capability, Error, Node, Result, walk};
use flagwalk_infrastructure::{AppConfig, ConfigLoader, init_logging};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options accepted by every command
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "flagwalk")]
#[command(about = "Option groups wired through a shared-instance graph walk")]
#[command(version)]
pub struct GlobalArgs {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// The command tree with every option group bound
pub struct Application {
    capability: Capability<dyn Flag>,
    commands: Vec<Box<dyn CliCommand>>,
    command: clap::Command,
}

impl Application {
    /// Application with the built-in commands and every linked flag
    pub fn new() -> Result<Self> {
        Self::with_commands(flag_capability(), builtin_commands())
    }

    /// Application over an explicit capability and command list
    pub fn with_commands(
        capability: Capability<dyn Flag>,
        mut commands: Vec<Box<dyn CliCommand>>,
    ) -> Result<Self> {
        let mut command = GlobalArgs::command()
            .subcommand_required(true)
            .arg_required_else_help(true);

        for entry in &mut commands {
            let args = bind(&mut **entry, &capability)?;
            debug!(command = entry.name(), args = args.len(), "command bound");
            command = command.subcommand(
                clap::Command::new(entry.name())
                    .about(entry.about())
                    .args(args),
            );
        }

        Ok(Self {
            capability,
            commands,
            command,
        })
    }

    /// The assembled clap command
    pub fn command(&self) -> &clap::Command {
        &self.command
    }

    /// Parse a command line into the command it selects
    pub fn parse<I, T>(mut self, args: I) -> std::result::Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(args)?;
        let globals = GlobalArgs::from_arg_matches(&matches)?;

        let Some((name, sub_matches)) = matches.subcommand() else {
            return Err(self
                .command
                .error(ErrorKind::MissingSubcommand, "a command is required"));
        };
        let Some(position) = self.commands.iter().position(|entry| entry.name() == name) else {
            return Err(self
                .command
                .error(ErrorKind::InvalidSubcommand, format!("unknown command '{name}'")));
        };

        Ok(Invocation {
            globals,
            command: self.commands.swap_remove(position),
            matches: sub_matches.clone(),
            capability: self.capability,
        })
    }
}

/// A parsed command line, ready to run
pub struct Invocation {
    globals: GlobalArgs,
    command: Box<dyn CliCommand>,
    matches: ArgMatches,
    capability: Capability<dyn Flag>,
}

impl Invocation {
    /// Options given before or after the command name
    pub fn globals(&self) -> &GlobalArgs {
        &self.globals
    }

    /// The selected command
    pub fn command(&self) -> &dyn CliCommand {
        self.command.as_ref()
    }

    /// Mutable access to the selected command
    pub fn command_mut(&mut self) -> &mut dyn CliCommand {
        self.command.as_mut()
    }

    /// Load the configuration the global options point at
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.globals.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load()?;
        if let Some(level) = &self.globals.log_level {
            config.logging.level = level.clone();
        }
        Ok(config)
    }

    /// Finalize every option group, then run the command
    pub fn execute(&mut self, config: &AppConfig, out: &mut dyn Write) -> Result<()> {
        let capability = &self.capability;
        let matches = &self.matches;
        walk(&mut *self.command, capability, |node| {
            if let Some(flag) = capability.view(node) {
                flag.process(matches, config)?;
            }
            Ok::<(), Error>(())
        })?;

        info!(command = self.command.name(), "running command");
        self.command.run(out)
    }
}

/// Load configuration, install logging and execute the invocation
pub fn run(mut invocation: Invocation, out: &mut dyn Write) -> Result<()> {
    let config = invocation.load_config()?;
    init_logging(&config.logging)?;
    invocation.execute(&config, out)
}

fn bind(command: &mut dyn CliCommand, capability: &Capability<dyn Flag>) -> Result<Vec<clap::Arg>> {
    let mut args = Vec::new();
    walk(command as &mut dyn Node, capability, |node| {
        if let Some(flag) = capability.view(node) {
            args.extend(flag.register());
        }
        Ok::<(), Error>(())
    })?;
    Ok(args)
}
