//! Operand coercion.
//!
//! Operands arrive untyped. They are converted to `f64` with a lenient,
//! prefix-based parse:
//! - numbers pass through unchanged
//! - strings: leading whitespace is skipped, then the longest prefix that is a
//!   decimal literal (`[+-]digits[.digits][(e|E)[+-]digits]`) or `[+-]Infinity`
//!   is parsed; anything after it is ignored (`"12abc"` -> 12)
//! - `null`, booleans, arrays and objects are not numbers
//!
//! "Not a number" is reported as `NaN`; callers check with `f64::is_nan`.

use calculator_sdk::RawValue;

const INFINITY_LITERAL: &str = "Infinity";

/// Coerce an untyped operand to `f64`, or `NaN` if it is not numeric.
#[must_use]
pub fn coerce_operand(value: &RawValue) -> f64 {
    match value {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => parse_float(s),
        RawValue::Null | RawValue::Bool(_) | RawValue::Structured => f64::NAN,
    }
}

/// Parse the numeric prefix of `input`, or return `NaN` when there is none.
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start_matches(is_str_whitespace);

    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if unsigned.starts_with(INFINITY_LITERAL) {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    match decimal_prefix_len(s) {
        Some(len) => s[..len].parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Whitespace skipped before a numeric literal: Unicode white space except
/// NEL, plus the byte-order mark.
fn is_str_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Length in bytes of the longest decimal literal at the start of `s`.
fn decimal_prefix_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = digits_from(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(end)
}
