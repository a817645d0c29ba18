//! Input tokens and their classification.
//!
//! Buttons and keys both arrive as short text tokens (the button label or
//! the typed character). Classification is the only place tokens are
//! interpreted, so pointer and keyboard input cannot drift apart.

use std::fmt;

/// Binary operators the calculator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown in the expression trail.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "÷",
        }
    }

    /// Apply the operator. Division by zero yields 0.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A recognized calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// 0-9
    Digit(u8),
    DecimalPoint,
    SignToggle,
    Operator(Operator),
    Equals,
    Backspace,
    ClearEntry,
    ClearAll,
}

impl Input {
    /// Classify a raw token. Returns `None` for anything unrecognized.
    pub fn classify(token: &str) -> Option<Input> {
        let input = match token {
            "." => Input::DecimalPoint,
            "±" | "_" => Input::SignToggle,
            "+" => Input::Operator(Operator::Add),
            "-" => Input::Operator(Operator::Subtract),
            "*" => Input::Operator(Operator::Multiply),
            "÷" | "/" => Input::Operator(Operator::Divide),
            "=" => Input::Equals,
            "⌫" => Input::Backspace,
            "CE" => Input::ClearEntry,
            "C" => Input::ClearAll,
            _ => return Self::classify_digit(token),
        };
        Some(input)
    }

    fn classify_digit(token: &str) -> Option<Input> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c
                .to_digit(10)
                .map(|d| Input::Digit(d as u8)),
            _ => None,
        }
    }

    /// Canonical token for this input, as printed on the keypad.
    pub fn label(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Input::Digit(d) => DIGITS.get(*d as usize).copied().unwrap_or("?"),
            Input::DecimalPoint => ".",
            Input::SignToggle => "±",
            Input::Operator(op) => op.symbol(),
            Input::Equals => "=",
            Input::Backspace => "⌫",
            Input::ClearEntry => "CE",
            Input::ClearAll => "C",
        }
    }
}
