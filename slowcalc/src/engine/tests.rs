use super::*;
use crate::format::{format_number, parse_display};
use crate::input::Operator;
use proptest::prelude::*;

fn run(tokens: &[&str]) -> Calculator<DisplayLines> {
    let mut calc = Calculator::new(DisplayLines::default());
    for token in tokens {
        calc.handle(token);
    }
    calc
}

fn assert_lines(calc: &Calculator<DisplayLines>, display: &str, expression: &str) {
    assert_eq!(calc.display(), display, "display");
    assert_eq!(calc.expression(), expression, "expression");
    // the sink saw the same text the engine holds
    assert_eq!(calc.sink().display, display, "sink display");
    assert_eq!(calc.sink().expression, expression, "sink expression");
}

/// Records every notification, in order.
#[derive(Default)]
struct Recorder {
    events: Vec<(&'static str, String)>,
}

impl DisplaySink for Recorder {
    fn display_changed(&mut self, text: &str) {
        self.events.push(("display", text.to_string()));
    }

    fn expression_changed(&mut self, text: &str) {
        self.events.push(("expression", text.to_string()));
    }
}

#[test]
fn test_initial_state() {
    let calc = run(&[]);
    assert_lines(&calc, "0", "");
    let state = calc.state();
    assert_eq!(state.stored_operand(), 0.0);
    assert_eq!(state.pending_operator(), None);
    assert!(state.start_new_entry());
    assert!(!state.operator_just_pressed());
}

#[test]
fn test_multiply_scenario() {
    let calc = run(&["7", "*", "8", "="]);
    assert_lines(&calc, "56", "7 * 8 =");
}

#[test]
fn test_divide_scenario() {
    let calc = run(&["9", "÷", "2", "="]);
    assert_lines(&calc, "4.5", "9 ÷ 2 =");
}

#[test]
fn test_slash_alias_divides() {
    let calc = run(&["9", "/", "2", "="]);
    assert_lines(&calc, "4.5", "9 ÷ 2 =");
}

#[test]
fn test_divide_by_zero_shows_zero() {
    let calc = run(&["5", "÷", "0", "="]);
    assert_lines(&calc, "0", "5 ÷ 0 =");
    assert_eq!(calc.state().display_operand(), 0.0);
}

#[test]
fn test_chaining_is_left_to_right() {
    let calc = run(&["2", "+", "3", "*"]);
    assert_lines(&calc, "5", "5 *");

    let calc = run(&["2", "+", "3", "*", "4", "="]);
    assert_lines(&calc, "20", "5 * 4 =");
}

#[test]
fn test_second_operator_replaces_first() {
    let calc = run(&["5", "+", "-"]);
    assert_lines(&calc, "5", "5 -");
    assert_eq!(calc.state().pending_operator(), Some(Operator::Subtract));

    let calc = run(&["5", "+", "-", "3", "="]);
    assert_lines(&calc, "2", "5 - 3 =");
}

#[test]
fn test_equals_without_operator() {
    let calc = run(&["4", "2", "="]);
    assert_lines(&calc, "42", "42 =");
    assert!(calc.state().start_new_entry());
}

#[test]
fn test_equals_repeat_redisplays_result() {
    let calc = run(&["5", "+", "3", "="]);
    assert_lines(&calc, "8", "5 + 3 =");

    let calc = run(&["5", "+", "3", "=", "="]);
    assert_lines(&calc, "8", "8 =");

    let calc = run(&["5", "+", "3", "=", "=", "="]);
    assert_lines(&calc, "8", "8 =");
}

#[test]
fn test_equals_reuses_display_as_right_operand() {
    let calc = run(&["5", "+", "="]);
    assert_lines(&calc, "10", "5 + 5 =");
}

#[test]
fn test_operator_after_result_continues() {
    let calc = run(&["5", "+", "3", "=", "*", "2", "="]);
    assert_lines(&calc, "16", "8 * 2 =");
}

#[test]
fn test_digit_after_result_starts_new_entry() {
    let calc = run(&["5", "+", "3", "=", "4"]);
    assert_lines(&calc, "4", "5 + 3 =");
    assert_eq!(calc.state().stored_operand(), 8.0);
}

#[test]
fn test_leading_zero_replaced() {
    let calc = run(&["0", "0", "7"]);
    assert_lines(&calc, "7", "");
}

#[test]
fn test_decimal_point_entry() {
    let calc = run(&["."]);
    assert_lines(&calc, "0.", "");

    let calc = run(&[".", "5"]);
    assert_lines(&calc, "0.5", "");
    assert_eq!(calc.state().display_operand(), 0.5);

    let calc = run(&["1", ".", ".", "2", "."]);
    assert_lines(&calc, "1.2", "");
}

#[test]
fn test_decimal_point_after_operator() {
    let calc = run(&["3", "+", ".", "5", "="]);
    assert_lines(&calc, "3.5", "3 + 0.5 =");
}

#[test]
fn test_sign_toggle() {
    let calc = run(&["1", "2", "±"]);
    assert_lines(&calc, "-12", "");
    assert_eq!(calc.state().display_operand(), -12.0);

    let calc = run(&["1", "2", "_", "_"]);
    assert_lines(&calc, "12", "");
}

#[test]
fn test_sign_toggle_on_zero() {
    let calc = run(&["±"]);
    assert_lines(&calc, "0", "");

    let calc = run(&["±", "±", "±"]);
    assert_lines(&calc, "0", "");
}

#[test]
fn test_sign_toggle_keeps_entry_mode() {
    // after an operator the toggled value is still replaced by the next digit
    let calc = run(&["5", "+", "±"]);
    assert_lines(&calc, "-5", "5 +");
    assert!(calc.state().start_new_entry());

    let calc = run(&["5", "+", "±", "3", "="]);
    assert_lines(&calc, "8", "5 + 3 =");
}

#[test]
fn test_sign_toggle_between_operators_chains() {
    // the toggle counts as an entry, so the next operator evaluates
    let calc = run(&["5", "+", "±", "*"]);
    assert_lines(&calc, "0", "0 *");
}

#[test]
fn test_sign_toggle_then_append() {
    let calc = run(&["5", "±", "3"]);
    assert_lines(&calc, "-53", "");
}

#[test]
fn test_backspace_single_digit_yields_zero() {
    let mut calc = run(&["7"]);
    for _ in 0..5 {
        calc.handle("⌫");
        assert_lines(&calc, "0", "");
    }
}

#[test]
fn test_backspace_multi_digit() {
    let calc = run(&["1", "2", "3", "⌫"]);
    assert_lines(&calc, "12", "");
    assert_eq!(calc.state().display_operand(), 12.0);
}

#[test]
fn test_backspace_keeps_trailing_point() {
    let calc = run(&["1", "2", ".", "5", "⌫"]);
    assert_lines(&calc, "12.", "");
    assert_eq!(calc.state().display_operand(), 12.0);

    let calc = run(&["1", "2", ".", "5", "⌫", "7"]);
    assert_lines(&calc, "12.7", "");
}

#[test]
fn test_backspace_bare_minus_resets() {
    let calc = run(&["5", "±", "⌫"]);
    assert_lines(&calc, "0", "");
    assert_eq!(calc.state().display_operand(), 0.0);
}

#[test]
fn test_backspace_to_negative_zero_shows_zero() {
    let calc = run(&["0", ".", "5", "±", "⌫", "⌫"]);
    assert_lines(&calc, "0", "");
    assert!(calc.state().display_operand().is_sign_positive());

    // the next digit replaces the zero instead of appending to it
    let calc = run(&["0", ".", "5", "±", "⌫", "⌫", "5"]);
    assert_lines(&calc, "5", "");
    assert_eq!(calc.state().display_operand(), 5.0);

    // a typed "-0." keeps its point
    let calc = run(&["0", ".", "5", "±", "⌫"]);
    assert_lines(&calc, "-0.", "");
}

#[test]
fn test_backspace_ignored_on_new_entry() {
    let calc = run(&["5", "+", "3", "=", "⌫"]);
    assert_lines(&calc, "8", "5 + 3 =");

    let calc = run(&["1", "2", "+", "⌫"]);
    assert_lines(&calc, "12", "12 +");
}

#[test]
fn test_clear_entry_keeps_pending_trail() {
    let calc = run(&["5", "+", "3", "CE"]);
    assert_lines(&calc, "0", "5 +");
    assert!(calc.state().start_new_entry());

    let calc = run(&["5", "+", "3", "CE", "4", "="]);
    assert_lines(&calc, "9", "5 + 4 =");
}

#[test]
fn test_clear_entry_drops_finished_trail() {
    let calc = run(&["5", "+", "3", "=", "CE"]);
    assert_lines(&calc, "0", "");
    assert_eq!(calc.state().stored_operand(), 8.0);
}

#[test]
fn test_clear_all_resets() {
    let calc = run(&["5", "+", "3", "*", "2", "C"]);
    assert_lines(&calc, "0", "");
    assert_eq!(calc.state(), &CalcState::new());

    let calc = run(&["1", ".", "5", "±", "÷", "C"]);
    assert_eq!(calc.state(), &CalcState::new());
}

#[test]
fn test_ignored_tokens_do_nothing() {
    let mut calc = run(&["1", "+", "2"]);
    let before = calc.state().clone();
    for token in ["", "x", "%", "sqrt", "12", "ce"] {
        assert!(!calc.handle(token));
    }
    assert_eq!(calc.state(), &before);
}

#[test]
fn test_handle_reports_recognized() {
    let mut calc = Calculator::new(());
    assert!(calc.handle("7"));
    assert!(calc.handle("C"));
    assert!(!calc.handle("?"));
}

#[test]
fn test_sink_receives_initial_and_changes() {
    let mut calc = Calculator::new(Recorder::default());
    assert_eq!(
        calc.sink().events,
        vec![("display", "0".to_string()), ("expression", String::new())]
    );

    calc.handle("7");
    calc.handle("x");
    calc.handle("+");
    assert_eq!(
        calc.sink().events[2..],
        [
            ("display", "7".to_string()),
            ("expression", "7 +".to_string()),
        ]
    );
}

#[test]
fn test_sink_silent_when_nothing_changes() {
    let mut calc = Calculator::new(Recorder::default());
    calc.handle("⌫");
    calc.handle("±");
    calc.handle("q");
    assert_eq!(calc.sink().events.len(), 2);
}

#[test]
fn test_transition_is_pure() {
    let start = CalcState::new();
    let next = transition(start.clone(), Input::Digit(4));
    assert_eq!(start, CalcState::new());
    assert_eq!(next.display_text(), "4");
    assert_eq!(transition(start, Input::Digit(4)), next);
}

#[test]
fn test_overflow_then_typing_starts_over() {
    let mut calc = run(&["1", "0", "0", "0", "0", "0", "0", "0", "0", "0"]);
    for _ in 0..40 {
        calc.handle("*");
        calc.handle("=");
    }
    // 1e9 squared repeatedly overflows to infinity
    assert_eq!(calc.display(), "inf");
    calc.handle("±");
    assert_eq!(calc.display(), "-inf");
    calc.handle("5");
    assert_eq!(calc.display(), "5");
}

// ===== Property tests =====

fn token_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        8 => prop::sample::select(vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]),
        2 => Just("."),
        1 => Just("±"),
        3 => prop::sample::select(vec!["+", "-", "*", "÷"]),
        2 => Just("="),
        1 => Just("⌫"),
        1 => Just("CE"),
        1 => Just("C"),
        1 => Just("junk"),
    ]
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

proptest! {
    /// Typed digits with at most one point read back as their numeric value.
    #[test]
    fn prop_digit_entry_matches_text(
        digits in prop::collection::vec(0u8..=9, 1..15),
        point in prop::option::of(0usize..15),
    ) {
        let mut text = String::new();
        let mut tokens = Vec::new();
        for (i, d) in digits.iter().enumerate() {
            if point == Some(i) {
                text.push('.');
                tokens.push(".".to_string());
            }
            text.push(char::from(b'0' + d));
            tokens.push(d.to_string());
        }

        let mut calc = Calculator::new(());
        for token in &tokens {
            calc.handle(token);
        }
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(calc.state().display_operand(), expected);
    }

    /// a op1 b op2 c = applies operators strictly left to right.
    #[test]
    fn prop_chaining_left_to_right(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
        op1 in operator_strategy(),
        op2 in operator_strategy(),
    ) {
        let mut calc = Calculator::new(DisplayLines::default());
        let type_number = |calc: &mut Calculator<DisplayLines>, n: u32| {
            for digit in n.to_string().chars() {
                calc.handle(&digit.to_string());
            }
        };
        type_number(&mut calc, a);
        calc.handle(op1.symbol());
        type_number(&mut calc, b);
        calc.handle(op2.symbol());
        type_number(&mut calc, c);
        calc.handle("=");
        let expected = op2.apply(op1.apply(a as f64, b as f64), c as f64);
        prop_assert_eq!(calc.display(), format_number(expected));
    }

    /// The display is never empty and its text always parses to the operand.
    #[test]
    fn prop_display_text_and_value_agree(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut calc = Calculator::new(DisplayLines::default());
        for token in tokens {
            calc.handle(token);
            let state = calc.state();
            prop_assert!(!state.display_text().is_empty());
            let parsed = parse_display(state.display_text());
            prop_assert!(parsed.is_some(), "unparseable display {:?}", state.display_text());
            let parsed = parsed.unwrap();
            prop_assert!(
                parsed == state.display_operand()
                    || (parsed.is_nan() && state.display_operand().is_nan())
            );
            let awaiting = state.expression_text().ends_with(|c: char| "+-*÷".contains(c));
            prop_assert_eq!(state.pending_operator().is_some(), awaiting);
        }
    }

    /// Clear-All returns to the initial state from anywhere.
    #[test]
    fn prop_clear_all_resets(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut calc = Calculator::new(());
        for token in tokens {
            calc.handle(token);
        }
        calc.handle("C");
        prop_assert_eq!(calc.state(), &CalcState::new());
    }
}
