//! Browser client for canvas Pong
//!
//! Hosts `game_core` in a page: the canvas 2D context is the draw target,
//! `requestAnimationFrame` drives the frames and DOM events become game
//! commands. Pure translation logic (`input`, `fsm`) builds on any target so
//! it can be tested natively.

pub mod fsm;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod scheduler;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point called from the page with the game canvas
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_client(canvas: web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second init (hot reload) finds the logger already set
    let _ = console_log::init_with_level(log::Level::Info);

    app::run(canvas)
}
