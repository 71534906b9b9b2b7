//! `requestAnimationFrame` scheduler

use std::cell::RefCell;
use std::rc::Rc;

use game_core::FrameScheduler;
use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
    handle: Option<i32>,
}

impl RafScheduler {
    /// The callback slot is filled in after the driver exists
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self {
            window,
            callback,
            handle: None,
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let callback = self.callback.borrow();
        let Some(closure) = callback.as_ref() else {
            error!("frame requested before the callback was installed");
            return;
        };

        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                error!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}
