//! Parsing of user ids taken from request paths.
//!
//! Ids are read with integer-prefix semantics: leading whitespace and an
//! optional sign are accepted, a `0x`/`0X` prefix switches to hexadecimal, and
//! parsing stops at the first character that is not a digit (`"12abc"` -> 12,
//! `"1.5"` -> 1). No digits at all means "not a number".

/// Parse the integer prefix of `raw`. Values beyond `i64` saturate.
#[must_use]
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw
        .trim_start_matches(|c: char| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}'));

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen = 0_usize;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
        seen += 1;
    }

    if seen == 0 {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}
