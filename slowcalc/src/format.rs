//! Number formatting for the display and the expression trail.

/// Render a computed value.
///
/// Whole values print without a fractional part (and never as `-0`);
/// everything else uses the default `f64` formatting.
pub fn format_number(n: f64) -> String {
    // `as` saturates, so huge values and infinities fall through to `{}`
    let truncated = n as i64;
    if n == truncated as f64 {
        format!("{}", truncated)
    } else {
        format!("{}", n)
    }
}

/// Parse display text back into a value. `None` for text that is not a
/// number, e.g. a lone `-`.
pub fn parse_display(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}
