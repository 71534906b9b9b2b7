//! Keyboard and pointer translation into game commands

use game_core::{Command, Key};

/// Map a `KeyboardEvent.key` value to a paddle key
pub fn map_key(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        "Shift" => Some(Key::Boost),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(key: &str) -> Option<Command> {
    map_key(key).map(|key| Command::Key { key, pressed: true })
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<Command> {
    map_key(key).map(|key| Command::Key {
        key,
        pressed: false,
    })
}

/// Convert a client-space pointer Y into surface pixels
///
/// The canvas may be displayed at a different size than its backing store
/// (CSS scaling, fullscreen), so the offset is scaled by the ratio of the two.
pub fn pointer_to_surface_y(client_y: f32, rect_top: f32, rect_height: f32, surface_height: f32) -> f32 {
    let offset = client_y - rect_top;
    if rect_height > 0.0 {
        offset * surface_height / rect_height
    } else {
        offset
    }
}
