// Single browser interval driving gesture ticks.
use js_sys::Function;
use wasm_bindgen::JsValue;

use crate::error::{BoardError, Result};
use crate::state::AnimationToken;

pub struct AnimationLoop {
    window: web_sys::Window,
    running: Option<(AnimationToken, i32)>,
}

impl AnimationLoop {
    pub fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            running: None,
        }
    }

    pub fn running(&self) -> Option<AnimationToken> {
        self.running.map(|(token, _)| token)
    }

    /// Make the running interval match `wanted`, restarting it when the token changes.
    pub fn sync(&mut self, wanted: Option<(AnimationToken, u32)>, callback: &Function) -> Result<()> {
        if self.running() == wanted.map(|(token, _)| token) {
            return Ok(());
        }
        self.cancel();
        let Some((token, interval_ms)) = wanted else {
            return Ok(());
        };
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_1(
                callback,
                timeout,
                &JsValue::from_f64(token.to_js()),
            )
            .map_err(BoardError::scheduler)?;
        log::trace!("interval {} started for {:?}", handle, token);
        self.running = Some((token, handle));
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some((token, handle)) = self.running.take() {
            self.window.clear_interval_with_handle(handle);
            log::trace!("interval {} for {:?} cleared", handle, token);
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
