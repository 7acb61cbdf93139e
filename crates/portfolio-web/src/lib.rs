pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use portfolio_core::PortfolioConfig;

use crate::app::App;

/// Installs panic and log hooks, then mounts the page into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();

    let (config, rejected) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (PortfolioConfig::default(), Some(e)),
    };

    logging::init(&config.logging);
    if let Some(e) = rejected {
        tracing::warn!("Ignoring inline config, using defaults: {}", e);
    }

    tracing::info!(motion = ?config.motion, "Mounting portfolio");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
