//! Keyboard input
//!
//! Turns egui key and text events into the same tokens the keypad sends.
//! Special keys are matched on key presses; everything else is taken from
//! typed text so that shifted characters such as `*` and `+` work on any
//! layout.

use egui::{Event, Key};

/// Characters accepted verbatim from typed text.
const TYPED_TOKENS: &str = "0123456789+-*÷=._";

/// Token for a special key press.
pub fn key_token(key: Key) -> Option<&'static str> {
    match key {
        Key::Slash => Some("÷"),
        Key::Enter => Some("="),
        Key::Backspace => Some("⌫"),
        Key::Delete => Some("CE"),
        Key::Escape => Some("C"),
        _ => None,
    }
}

/// Tokens for a chunk of typed text, one per accepted character.
pub fn typed_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.chars()
        .filter(|c| TYPED_TOKENS.contains(*c))
        .map(String::from)
}

/// Tokens for one frame's worth of events, in arrival order.
pub fn tokens_from_events(events: &[Event]) -> Vec<String> {
    let mut tokens = Vec::new();
    for event in events {
        match event {
            Event::Key { key, pressed: true, modifiers, .. } if !modifiers.command => {
                if let Some(token) = key_token(*key) {
                    tokens.push(token.to_string());
                }
            }
            Event::Text(text) => tokens.extend(typed_tokens(text)),
            _ => {}
        }
    }
    tokens
}
