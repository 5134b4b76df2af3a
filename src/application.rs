//! `HitsServer` Abscissa Application
//!
//! Owns the framework side of the process: the tokio runtime the web server
//! runs on, the tracing subscriber and the merged configuration. The hit
//! counter is not part of it, `web::start_web_server` creates that.

use crate::{commands::EntryPoint, config::HitsServerConfig};
use abscissa_core::{
    application::{self, AppCell},
    config::{self, CfgCell},
    trace, Application, FrameworkError, StandardPaths,
};
use abscissa_tokio::TokioComponent;

/// Framework handle, booted once from `main`
pub static HITS_SERVER_APP: AppCell<HitsServerApp> = AppCell::new();

/// `HitsServer` Application
#[derive(Debug)]
pub struct HitsServerApp {
    /// Defaults merged with the `serve` options, set once after parsing.
    config: CfgCell<HitsServerConfig>,

    state: application::State<Self>,
}

/// Starts without configuration; it is filled in by [`Application::after_config`]
/// from the defaults and the command line, never from a file.
impl Default for HitsServerApp {
    fn default() -> Self {
        Self {
            config: CfgCell::default(),
            state: application::State::default(),
        }
    }
}

impl Application for HitsServerApp {
    type Cmd = EntryPoint;

    type Cfg = HitsServerConfig;

    type Paths = StandardPaths;

    fn config(&self) -> config::Reader<HitsServerConfig> {
        self.config.read()
    }

    fn state(&self) -> &application::State<Self> {
        &self.state
    }

    /// The axum server needs a tokio runtime, which `abscissa_tokio::run`
    /// takes from this component.
    fn register_components(&mut self, command: &Self::Cmd) -> Result<(), FrameworkError> {
        let mut components = self.framework_components(command)?;

        components.push(Box::new(TokioComponent::new()?));

        self.state.components_mut().register(components)
    }

    fn after_config(&mut self, config: Self::Cfg) -> Result<(), FrameworkError> {
        self.state.components_mut().after_config(&config)?;
        self.config.set_once(config);
        Ok(())
    }

    /// `-v` lowers the level to debug, which also shows the merged settings
    /// and every reset of the hit counter. The per-request log is on either way.
    fn tracing_config(&self, command: &EntryPoint) -> trace::Config {
        if command.verbose {
            trace::Config::verbose()
        } else {
            trace::Config::default()
        }
    }
}
