//! Calculator engine
//!
//! [`transition`] is the whole arithmetic state machine as a pure function.
//! [`Calculator`] wraps it for front ends: tokens go in through
//! [`Calculator::handle`], display text comes out through a [`DisplaySink`].

mod state;
mod transition;

pub use state::CalcState;
pub use transition::transition;

use crate::input::Input;

/// Receives the two display lines whenever they change.
pub trait DisplaySink {
    /// Main display (the current entry or result).
    fn display_changed(&mut self, text: &str);
    /// Expression trail shown above the main display.
    fn expression_changed(&mut self, text: &str);
}

/// Sink that discards everything, for callers that poll instead.
impl DisplaySink for () {
    fn display_changed(&mut self, _text: &str) {}
    fn expression_changed(&mut self, _text: &str) {}
}

/// The two display lines as plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLines {
    pub display: String,
    pub expression: String,
}

impl DisplaySink for DisplayLines {
    fn display_changed(&mut self, text: &str) {
        self.display.clear();
        self.display.push_str(text);
    }

    fn expression_changed(&mut self, text: &str) {
        self.expression.clear();
        self.expression.push_str(text);
    }
}

/// A calculator bound to an output sink.
pub struct Calculator<S: DisplaySink> {
    state: CalcState,
    sink: S,
}

impl<S: DisplaySink> Calculator<S> {
    /// Start from the initial state and push its texts to `sink`.
    pub fn new(mut sink: S) -> Self {
        let state = CalcState::new();
        sink.display_changed(state.display_text());
        sink.expression_changed(state.expression_text());
        Self { state, sink }
    }

    /// Classify and apply one token. Returns `false` if it was ignored.
    pub fn handle(&mut self, token: &str) -> bool {
        match Input::classify(token) {
            Some(input) => {
                self.apply(input);
                true
            }
            None => {
                tracing::debug!(token, "ignored input token");
                false
            }
        }
    }

    /// Apply an already classified input.
    pub fn apply(&mut self, input: Input) {
        let next = transition(self.state.clone(), input);
        tracing::trace!(
            ?input,
            display = next.display_text(),
            expression = next.expression_text(),
            "transition"
        );

        if next.display_text() != self.state.display_text() {
            self.sink.display_changed(next.display_text());
        }
        if next.expression_text() != self.state.expression_text() {
            self.sink.expression_changed(next.expression_text());
        }
        self.state = next;
    }

    pub fn display(&self) -> &str {
        self.state.display_text()
    }

    pub fn expression(&self) -> &str {
        self.state.expression_text()
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests;
