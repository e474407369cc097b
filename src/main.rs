use std::rc::Rc;

mod animation;
mod components;
mod error;
mod geometry;
mod model;
mod state;
mod util;

use components::app::{App, AppProps};
use model::BoardConfig;

fn main() {
    let loaded = util::load_config();
    let level = loaded
        .as_ref()
        .map(BoardConfig::log_level)
        .unwrap_or(log::Level::Info);
    util::init_logging(level);
    let config = loaded.unwrap_or_else(|err| {
        log::error!("{}; using default board config", err);
        BoardConfig::default()
    });
    log::info!(
        "board ready: home {:?} at zoom {}, max zoom {}",
        config.initial_position,
        config.initial_zoom,
        config.max_zoom
    );
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
