use log::{info, LevelFilter};

use crate::app::{App, AppProps};

mod api;
mod app;
mod browser;
mod components;
mod config;
mod logging;

fn main() {
    let config = config::load();
    logging::init(config.level_filter().unwrap_or(LevelFilter::Info));
    info!("remote conversion service at {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
