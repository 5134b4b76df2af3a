//! `HitsServer` Subcommands
//!
//! - `serve`: start the file server with its metrics endpoints
//! - `--version`: print application version
//!
//! There is no configuration file. Settings come from their defaults,
//! environment variables and command-line options, see
//! [`crate::config::HitsServerConfig`].

mod serve;

use crate::{commands::serve::ServeCmd, config::HitsServerConfig};
use abscissa_core::{config::Override, Command, Configurable, FrameworkError, Runnable};
use clap::builder::{
    styling::{AnsiColor, Effects},
    Styles,
};
use std::path::PathBuf;

/// `HitsServer` Subcommands
#[derive(clap::Parser, Command, Debug, Runnable)]
pub enum HitsServerCmd {
    /// Serve static files and count the hits on them
    Serve(ServeCmd),
}

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Red.on_default() | Effects::BOLD)
        .usage(AnsiColor::Red.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default())
}

/// Entry point for the application. It needs to be a struct to allow using subcommands!
#[derive(clap::Parser, Command, Debug)]
#[command(author, about, name = "hits-server", styles = styles(), version = env!("CARGO_PKG_VERSION"))]
pub struct EntryPoint {
    #[command(subcommand)]
    cmd: HitsServerCmd,

    /// Enable verbose logging
    #[arg(short, long, global = true, env = "HITS_SERVER_VERBOSE")]
    pub verbose: bool,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        self.cmd.run();
    }
}

impl Configurable<HitsServerConfig> for EntryPoint {
    /// Never read a configuration file, the defaults are complete.
    fn config_path(&self) -> Option<PathBuf> {
        None
    }

    /// Apply the command-line options on top of the default configuration.
    fn process_config(&self, config: HitsServerConfig) -> Result<HitsServerConfig, FrameworkError> {
        match &self.cmd {
            HitsServerCmd::Serve(cmd) => cmd.override_config(config),
        }
    }
}
