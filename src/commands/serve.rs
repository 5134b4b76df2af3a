//! `serve` subcommand

use abscissa_core::{
    config::Override,
    status_err,
    tracing::{debug, info},
    Application, Command, FrameworkError, Runnable, Shutdown,
};
use clap::Parser;
use conflate::Merge;

use crate::{
    config::HitsServerConfig, context::ServerRuntimeContext, error::AppResult,
    prelude::HITS_SERVER_APP, web::start_web_server,
};

/// `serve` subcommand
///
/// Runs until the process is killed. A failure during startup, e.g. when
/// the listen address is already taken, ends the process with exit status 1.
#[derive(Command, Debug, Parser)]
pub struct ServeCmd {
    /// Server settings
    #[clap(flatten)]
    context: HitsServerConfig,
}

impl Override<HitsServerConfig> for ServeCmd {
    fn override_config(
        &self,
        mut config: HitsServerConfig,
    ) -> Result<HitsServerConfig, FrameworkError> {
        debug!(?config, "ServerConfig before merge.");
        debug!(?self.context, "Command context from CLI.");

        // Command-line values win over the defaults where they are present.
        config.merge(self.context.clone());

        Ok(config)
    }
}

impl Runnable for ServeCmd {
    /// Start the application.
    fn run(&self) {
        if let Err(tokio_err) = abscissa_tokio::run(&HITS_SERVER_APP, async {
            if let Err(err) = self.inner_run().await {
                status_err!("{}", err);
                HITS_SERVER_APP.shutdown_with_exitcode(Shutdown::Crash, 1);
            }
        }) {
            status_err!("{}", tokio_err);
            HITS_SERVER_APP.shutdown_with_exitcode(Shutdown::Crash, 1);
        };
    }
}

impl ServeCmd {
    pub async fn inner_run(&self) -> AppResult<()> {
        let server_config = HITS_SERVER_APP.config();

        debug!(?server_config, "Loaded ServerConfig.");

        let runtime_ctx = ServerRuntimeContext::from_config(&server_config)?;

        info!("Starting hits server ...");

        start_web_server(runtime_ctx).await?;

        Ok(())
    }
}
