//! Pure state transitions

use super::state::CalcState;
use crate::format::{format_number, parse_display};
use crate::input::{Input, Operator};

/// Apply one input to a state and return the next state.
///
/// Total: every input is accepted in every state.
pub fn transition(mut state: CalcState, input: Input) -> CalcState {
    match input {
        Input::Digit(d) => enter_digit(&mut state, d),
        Input::DecimalPoint => enter_decimal_point(&mut state),
        Input::SignToggle => toggle_sign(&mut state),
        Input::Operator(op) => select_operator(&mut state, op),
        Input::Equals => equals(&mut state),
        Input::Backspace => backspace(&mut state),
        Input::ClearEntry => clear_entry(&mut state),
        Input::ClearAll => clear_all(&mut state),
    }
    state
}

fn enter_digit(state: &mut CalcState, digit: u8) {
    let digit = char::from(b'0' + digit.min(9));
    if starts_fresh(state) || state.display_text == "0" {
        state.display_text = digit.to_string();
    } else {
        state.display_text.push(digit);
    }
    state.display_operand = parse_display(&state.display_text).unwrap_or(state.display_operand);
    state.start_new_entry = false;
    state.operator_just_pressed = false;
}

/// Typing replaces the display after an operator or result, and also when
/// the display shows `inf`/`NaN`, which cannot be extended.
fn starts_fresh(state: &CalcState) -> bool {
    state.start_new_entry || !state.display_operand.is_finite()
}

fn enter_decimal_point(state: &mut CalcState) {
    if starts_fresh(state) {
        state.display_text = "0.".to_string();
        state.display_operand = 0.0;
        state.start_new_entry = false;
    } else if !state.display_text.contains('.') {
        state.display_text.push('.');
    }
    state.operator_just_pressed = false;
}

fn toggle_sign(state: &mut CalcState) {
    let negated = -state.display_operand;
    state.write_display(negated);
    state.operator_just_pressed = false;
}

fn select_operator(state: &mut CalcState, op: Operator) {
    match state.pending_operator {
        Some(pending) if !state.operator_just_pressed => {
            state.stored_operand = pending.apply(state.stored_operand, state.display_operand);
            let result = state.stored_operand;
            state.write_display(result);
        }
        // a second operator in a row replaces the first
        _ => state.stored_operand = state.display_operand,
    }

    state.pending_operator = Some(op);
    state.operator_just_pressed = true;
    state.start_new_entry = true;
    state.expression_text = format!("{} {}", format_number(state.stored_operand), op);
}

fn equals(state: &mut CalcState) {
    let result = match state.pending_operator {
        None => {
            state.expression_text = format!("{} =", format_number(state.display_operand));
            state.display_operand
        }
        Some(op) => {
            state.expression_text = format!(
                "{} {} {} =",
                format_number(state.stored_operand),
                op,
                format_number(state.display_operand),
            );
            op.apply(state.stored_operand, state.display_operand)
        }
    };

    state.write_display(result);
    state.stored_operand = result;
    state.pending_operator = None;
    state.start_new_entry = true;
    state.operator_just_pressed = true;
}

fn backspace(state: &mut CalcState) {
    if state.start_new_entry {
        return;
    }

    state.display_text.pop();
    match parse_display(&state.display_text) {
        // "-0" is rendered as "0" so the next digit replaces it
        Some(value) if value == 0.0 && !state.display_text.contains('.') => {
            state.write_display(0.0)
        }
        Some(value) => state.display_operand = value,
        // empty or a bare "-"
        None => state.write_display(0.0),
    }
}

fn clear_entry(state: &mut CalcState) {
    state.write_display(0.0);
    state.start_new_entry = true;
    if state.expression_text.ends_with('=') {
        state.expression_text.clear();
    }
}

fn clear_all(state: &mut CalcState) {
    clear_entry(state);
    state.stored_operand = 0.0;
    state.pending_operator = None;
    state.operator_just_pressed = false;
    state.expression_text.clear();
}
