//! DOM result overlay

use game_core::Overlay;
use log::warn;
use web_sys::Element;

/// Shows the result message by toggling the `hidden` attribute
pub struct DomOverlay {
    root: Element,
    message: Element,
}

impl DomOverlay {
    pub fn new(root: Element, message: Element) -> Self {
        Self { root, message }
    }
}

impl Overlay for DomOverlay {
    fn show(&mut self, message: &str) {
        self.message.set_text_content(Some(message));
        if let Err(e) = self.root.remove_attribute("hidden") {
            warn!("failed to show overlay: {:?}", e);
        }
    }

    fn hide(&mut self) {
        if let Err(e) = self.root.set_attribute("hidden", "") {
            warn!("failed to hide overlay: {:?}", e);
        }
    }
}
