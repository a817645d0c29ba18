//! SlowCalc core
//!
//! The calculator engine and everything the window needs that can be
//! tested without one: token classification, number formatting, the
//! keypad layout, keyboard mapping and saved preferences.

pub mod engine;
pub mod format;
pub mod input;
pub mod keyboard;
pub mod keypad;
pub mod settings;

pub use engine::{CalcState, Calculator, DisplayLines, DisplaySink};
pub use input::{Input, Operator};
