//! Browser wiring: DOM events in, frames out

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Command, Config, Game, GameRng, LoopDriver, Surface};
use log::{debug, info};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent,
    Window,
};

use crate::canvas::CanvasTarget;
use crate::fsm::{PresentationAction, PresentationFsm, PresentationState};
use crate::input::{handle_key_down, handle_key_up, pointer_to_surface_y};
use crate::overlay::DomOverlay;
use crate::scheduler::{FrameCallback, RafScheduler};

pub const OVERLAY_ID: &str = "overlay";
pub const MESSAGE_ID: &str = "result-message";
pub const RESTART_ID: &str = "restart-button";
pub const FULLSCREEN_ID: &str = "fullscreen-button";

type Driver = LoopDriver<RafScheduler, DomOverlay, CanvasTarget>;
type SharedDriver = Rc<RefCell<Driver>>;

/// Everything the event handlers share
struct App {
    window: Window,
    document: Document,
    canvas: HtmlCanvasElement,
    driver: SharedDriver,
    presentation: RefCell<PresentationFsm>,
    windowed_size: (u32, u32),
}

impl App {
    fn submit(&self, command: Command) {
        // Overflow is already logged by the driver
        let _ = self.driver.borrow_mut().submit(command);
    }

    fn toggle_fullscreen(&self) {
        let result = self
            .presentation
            .borrow_mut()
            .transition(PresentationAction::Toggle);
        if !result.success() {
            debug!("fullscreen toggle ignored in {:?}", result.from_state());
            return;
        }

        match result.to_state() {
            PresentationState::Entering => {
                if let Err(e) = self.canvas.request_fullscreen() {
                    debug!("fullscreen request refused: {:?}", e);
                    self.presentation
                        .borrow_mut()
                        .transition(PresentationAction::Rejected);
                }
            }
            PresentationState::Exiting => self.document.exit_fullscreen(),
            _ => {}
        }
    }

    fn on_fullscreen_change(&self) {
        let entered = self.document.fullscreen_element().is_some();
        let action = if entered {
            PresentationAction::Entered
        } else {
            PresentationAction::Exited
        };
        self.presentation.borrow_mut().transition(action);

        let (width, height) = if entered {
            (
                js_dimension(self.window.inner_width()).unwrap_or(self.windowed_size.0),
                js_dimension(self.window.inner_height()).unwrap_or(self.windowed_size.1),
            )
        } else {
            self.windowed_size
        };

        self.canvas.set_width(width);
        self.canvas.set_height(height);
        info!("canvas is now {}x{}", width, height);
        self.submit(Command::Resize {
            width: width as f32,
            height: height as f32,
        });
    }

    fn on_fullscreen_error(&self) {
        // The host refused; nothing is shown to the player
        debug!("fullscreen change rejected");
        self.presentation
            .borrow_mut()
            .transition(PresentationAction::Rejected);
    }
}

fn js_dimension(value: Result<JsValue, JsValue>) -> Option<u32> {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| *v > 0.0)
        .map(|v| v as u32)
}

/// Attach a listener for the lifetime of the page
fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn element_by_id(document: &Document, id: &str) -> Result<web_sys::Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element #{}", id)))
}

/// Build the game on `canvas` and start the frame loop
pub fn run(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let config = Config::new();
    let surface = Surface::new(
        canvas.width() as f32,
        canvas.height() as f32,
        config.paddle_height,
    )
    .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;
    let game = Game::new(config, surface, GameRng::from_entropy());

    let overlay = DomOverlay::new(
        element_by_id(&document, OVERLAY_ID)?,
        element_by_id(&document, MESSAGE_ID)?,
    );
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler::new(window.clone(), callback.clone());
    let driver: SharedDriver = Rc::new(RefCell::new(LoopDriver::new(
        game,
        scheduler,
        overlay,
        CanvasTarget::new(ctx),
    )));

    {
        let driver = driver.clone();
        *callback.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            driver.borrow_mut().frame();
        }));
    }

    let app = Rc::new(App {
        windowed_size: (canvas.width(), canvas.height()),
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        driver: driver.clone(),
        presentation: RefCell::new(PresentationFsm::new()),
    });

    {
        let app = app.clone();
        listen(&canvas, "mousemove", move |event: MouseEvent| {
            let rect = app.canvas.get_bounding_client_rect();
            let y = pointer_to_surface_y(
                event.client_y() as f32,
                rect.top() as f32,
                rect.height() as f32,
                app.canvas.height() as f32,
            );
            app.submit(Command::PointerMove { y });
        })?;
    }
    {
        let app = app.clone();
        listen(&window, "keydown", move |event: KeyboardEvent| {
            if let Some(command) = handle_key_down(&event.key()) {
                event.prevent_default();
                app.submit(command);
            }
        })?;
    }
    {
        let app = app.clone();
        listen(&window, "keyup", move |event: KeyboardEvent| {
            if let Some(command) = handle_key_up(&event.key()) {
                app.submit(command);
            }
        })?;
    }
    {
        let app = app.clone();
        listen(&window, "blur", move |_event: web_sys::Event| {
            app.submit(Command::ReleaseAllKeys);
        })?;
    }
    {
        let app = app.clone();
        listen(
            &element_by_id(&document, RESTART_ID)?,
            "click",
            move |_event: web_sys::Event| app.submit(Command::Restart),
        )?;
    }
    {
        let app = app.clone();
        listen(
            &element_by_id(&document, FULLSCREEN_ID)?,
            "click",
            move |_event: web_sys::Event| app.toggle_fullscreen(),
        )?;
    }
    {
        let app = app.clone();
        listen(&document, "fullscreenchange", move |_event: web_sys::Event| {
            app.on_fullscreen_change();
        })?;
    }
    {
        let app = app.clone();
        listen(&document, "fullscreenerror", move |_event: web_sys::Event| {
            app.on_fullscreen_error();
        })?;
    }

    driver.borrow_mut().start();
    info!(
        "pong started on a {}x{} canvas",
        canvas.width(),
        canvas.height()
    );
    Ok(())
}
