//! Browser clock backed by `setInterval`

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::Clock;

/// Fires a stored callback through `window.setInterval`
///
/// The callback is installed after construction because it usually needs a
/// (weak) handle to the game that owns this clock.
#[derive(Default)]
pub struct IntervalClock {
    callback: Option<Closure<dyn FnMut()>>,
    handle: Option<i32>,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl Clock for IntervalClock {
    fn start(&mut self, period_ms: f64) {
        if self.handle.is_some() {
            return;
        }
        let Some(callback) = self.callback.as_ref() else {
            log::error!("IntervalClock started without a callback");
            return;
        };
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule ticks on");
            return;
        };
        // setInterval truncates fractional timeouts the same way
        let timeout = (period_ms as i32).max(1);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalClock {
    fn drop(&mut self) {
        self.stop();
    }
}
