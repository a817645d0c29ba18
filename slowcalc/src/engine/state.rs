//! Calculator state value

use crate::format::format_number;
use crate::input::Operator;

/// Everything the calculator remembers between inputs.
///
/// Each input produces a new `CalcState` (see [`super::transition`]). The
/// observable modes (awaiting first operand, entry in progress, operator
/// pending, result shown) are derived from these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcState {
    /// Left-hand operand of the pending operation.
    pub(crate) stored_operand: f64,
    /// Value of the current entry; always parses from `display_text`.
    pub(crate) display_operand: f64,
    pub(crate) pending_operator: Option<Operator>,
    /// Entry as typed, e.g. `"12."` keeps its trailing point.
    pub(crate) display_text: String,
    /// Trail above the main display, e.g. `"12 + 3 ="`.
    pub(crate) expression_text: String,
    /// Next digit replaces the display instead of appending.
    pub(crate) start_new_entry: bool,
    /// Last input was an operator or equals.
    pub(crate) operator_just_pressed: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcState {
    pub fn new() -> Self {
        Self {
            stored_operand: 0.0,
            display_operand: 0.0,
            pending_operator: None,
            display_text: "0".to_string(),
            expression_text: String::new(),
            start_new_entry: true,
            operator_just_pressed: false,
        }
    }

    pub fn stored_operand(&self) -> f64 {
        self.stored_operand
    }

    pub fn display_operand(&self) -> f64 {
        self.display_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn expression_text(&self) -> &str {
        &self.expression_text
    }

    pub fn start_new_entry(&self) -> bool {
        self.start_new_entry
    }

    pub fn operator_just_pressed(&self) -> bool {
        self.operator_just_pressed
    }

    /// Write a computed value to the display using the canonical format.
    pub(crate) fn write_display(&mut self, value: f64) {
        // -0 would print as "0" but negate back to 0; keep text and value in step
        let value = if value == 0.0 { 0.0 } else { value };
        self.display_text = format_number(value);
        self.display_operand = value;
    }
}
