//! `HitsServer` Config
//!
//! Settings are taken from the command line (or the matching environment
//! variables) and merged on top of the defaults. There is no configuration
//! file, see `commands.rs`.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use conflate::Merge;
use serde::Deserialize;

/// `HitsServer` Configuration
#[derive(Clone, Debug, Deserialize, Default, Merge, Parser)]
#[serde(deny_unknown_fields, rename_all = "kebab-case", default)]
pub struct HitsServerConfig {
    /// Server settings
    #[command(flatten)]
    pub server: ConnectionSettings,

    /// Static file settings
    #[command(flatten)]
    pub files: FileSettings,
}

/// Overwrite the left value with the right value if the right value is `Some`.
fn overwrite_with_some<T>(left: &mut Option<T>, right: Option<T>) {
    if right.is_some() {
        *left = right;
    }
}

#[derive(Clone, Deserialize, Debug, Merge, Parser, Copy)]
#[serde(deny_unknown_fields, default, rename_all = "kebab-case")]
pub struct ConnectionSettings {
    /// IP address and port to bind to
    #[arg(long, env = "HITS_SERVER_LISTEN")]
    #[merge(strategy = overwrite_with_some)]
    pub listen: Option<SocketAddr>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            listen: Some(default_socket_address()),
        }
    }
}

/// All interfaces, port 8080.
pub(crate) fn default_socket_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

#[derive(Clone, Deserialize, Debug, Merge, Parser)]
#[serde(deny_unknown_fields, default, rename_all = "kebab-case")]
pub struct FileSettings {
    /// Directory to serve static files from
    #[arg(long, env = "HITS_SERVER_ROOT")]
    #[merge(strategy = overwrite_with_some)]
    pub root: Option<PathBuf>,

    /// URL path the static files are served under
    ///
    /// The prefix is stripped before the file path is resolved, so with the
    /// default `/app` a request for `/app/index.html` serves `<root>/index.html`.
    /// Use `/` to serve the files from the top level.
    #[arg(long, env = "HITS_SERVER_PREFIX")]
    #[merge(strategy = overwrite_with_some)]
    pub prefix: Option<String>,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            root: Some(default_root()),
            prefix: Some(DEFAULT_PREFIX.to_string()),
        }
    }
}

pub(crate) const DEFAULT_PREFIX: &str = "/app";

pub(crate) fn default_root() -> PathBuf {
    PathBuf::from(".")
}
