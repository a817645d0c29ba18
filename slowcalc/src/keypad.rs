//! Keypad layout

use crate::input::Input;

/// Button labels, top row first. Each label is also the token sent to the
/// engine when the button is clicked.
pub static KEYPAD_ROWS: [[&str; 4]; 5] = [
    ["±", "CE", "C", "⌫"],
    ["7", "8", "9", "÷"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

/// Visual grouping of keypad buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Number,
    /// Arithmetic operators and equals
    Operator,
    /// Sign toggle, clearing and backspace
    Control,
}

impl ButtonKind {
    pub fn of(input: Input) -> Self {
        match input {
            Input::Digit(_) | Input::DecimalPoint => ButtonKind::Number,
            Input::Operator(_) | Input::Equals => ButtonKind::Operator,
            Input::SignToggle | Input::Backspace | Input::ClearEntry | Input::ClearAll => {
                ButtonKind::Control
            }
        }
    }
}

/// One keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub input: Input,
    pub kind: ButtonKind,
    pub row: usize,
    pub col: usize,
}

/// All keypad buttons in reading order.
pub fn buttons() -> impl Iterator<Item = KeypadButton> {
    KEYPAD_ROWS.iter().enumerate().flat_map(|(row, labels)| {
        labels.iter().enumerate().filter_map(move |(col, &label)| {
            Input::classify(label).map(|input| KeypadButton {
                label,
                input,
                kind: ButtonKind::of(input),
                row,
                col,
            })
        })
    })
}

/// Button for an input. Used to flash the button matching a key press.
pub fn button_for(input: Input) -> Option<KeypadButton> {
    buttons().find(|b| b.input == input)
}
