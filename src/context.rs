use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use abscissa_core::prelude::{debug, info};

use crate::{
    config::{default_root, default_socket_address, HitsServerConfig, DEFAULT_PREFIX},
    error::{AppResult, ErrorKind},
};

/// Paths under this prefix belong to the API and cannot host static files.
const API_PREFIX: &str = "/api";

/// Where the static file service is mounted in the URL space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileMount {
    /// Serve files from the top level, every unmatched path goes to the files.
    Root,
    /// Serve files under the given prefix, e.g. `/app`. Never ends with `/`.
    Nested(String),
}

impl FileMount {
    /// Normalize a configured prefix.
    ///
    /// Trailing slashes are dropped, so `/app/` and `/app` are the same mount
    /// and `/` alone is the root mount.
    pub fn parse(prefix: &str) -> AppResult<Self> {
        if !prefix.starts_with('/') {
            return Err(ErrorKind::Config
                .context(format!("Prefix `{prefix}` must start with `/`."))
                .into());
        }

        let trimmed = prefix.trim_end_matches('/');

        if trimmed.is_empty() {
            return Ok(Self::Root);
        }

        if trimmed.contains(['*', ':', '{', '}']) || trimmed.contains("//") {
            return Err(ErrorKind::Config
                .context(format!("Prefix `{prefix}` is not a plain URL path."))
                .into());
        }

        if trimmed == API_PREFIX || trimmed.starts_with(&format!("{API_PREFIX}/")) {
            return Err(ErrorKind::Config
                .context(format!(
                    "Prefix `{prefix}` would shadow the `{API_PREFIX}` endpoints."
                ))
                .into());
        }

        Ok(Self::Nested(trimmed.to_string()))
    }
}

/// Validated settings the web server is started with.
#[derive(Clone, Debug)]
pub struct ServerRuntimeContext {
    pub(crate) socket_address: SocketAddr,
    pub(crate) root: PathBuf,
    pub(crate) mount: FileMount,
}

impl ServerRuntimeContext {
    pub fn from_config(config: &HitsServerConfig) -> AppResult<Self> {
        let socket_address = config.server.listen.unwrap_or_else(default_socket_address);
        debug!(?socket_address, "Parsed socket address.");

        let root = Self::root(config.files.root.clone().unwrap_or_else(default_root))?;

        let mount = FileMount::parse(config.files.prefix.as_deref().unwrap_or(DEFAULT_PREFIX))?;
        debug!(?mount, "Parsed file mount.");

        Ok(Self {
            socket_address,
            root,
            mount,
        })
    }

    fn root(root: PathBuf) -> AppResult<PathBuf> {
        let metadata = root.metadata().map_err(|err| {
            ErrorKind::StaticRoot.context(format!(
                "Could not access `{}`: `{err}`",
                root.display()
            ))
        })?;

        if !metadata.is_dir() {
            return Err(ErrorKind::StaticRoot
                .context(format!("`{}` is not a directory.", root.display()))
                .into());
        }

        info!("Serving static files from: `{}`", root.display());

        Ok(root)
    }

    pub const fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    pub const fn mount(&self) -> &FileMount {
        &self.mount
    }
}
