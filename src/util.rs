// Browser helpers shared by the components.
use crate::error::{BoardError, Result};
use crate::model::BoardConfig;

/// Id of the optional `<script type="application/json">` block holding a [`BoardConfig`].
pub const CONFIG_ELEMENT_ID: &str = "board-config";

pub fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(BoardError::NoWindow)
}

pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    // A logger may already be installed (hot reload); keep the first one.
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialised");
    }
}

/// Read the page's board config; no config block means defaults.
pub fn load_config() -> Result<BoardConfig> {
    let document = window()?.document().ok_or(BoardError::NoDocument)?;
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(BoardConfig::default());
    };
    if raw.trim().is_empty() {
        return Ok(BoardConfig::default());
    }
    BoardConfig::from_json(&raw)
}
