mod config;
mod context;
mod error;
mod network;
mod resources;
mod ui;

use std::sync::Arc;

use env_logger::Env;

use crate::config::{BuildSettings, Config};
use crate::context::AppContext;
use crate::network::client::HttpQuoteSource;
use crate::resources::ResourceBundle;
use crate::ui::app::EguiToolkit;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let exit_code = match launch() {
        Ok(code) => code,
        Err(e) => {
            log::error!("startup failed: {e}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Resolve configuration and resources, then hand control to the event loop.
fn launch() -> error::Result<i32> {
    let config = Config::from_env()?;
    let bundle = ResourceBundle::discover(config.resource_root.as_deref());
    let settings = BuildSettings::load(&bundle)?;
    log::info!(
        "starting {} {} ({:?} window)",
        settings.app_name,
        settings.version,
        config.window
    );

    let source = HttpQuoteSource::new()?;
    log::debug!("quotes from {}", source.url());

    let toolkit = EguiToolkit::new(settings.app_name.clone());
    let appctxt = AppContext::new(toolkit, bundle, settings, config.window, Arc::new(source))?;
    appctxt.run()
}
