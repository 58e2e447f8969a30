//! Lenient integer prefix parsing shared by the count and pool inputs.

/// Parse the leading integer of `input`: optional whitespace, optional sign,
/// then at least one digit. A `0x`/`0X` prefix switches to hexadecimal.
/// Anything after the digits is ignored ("12abc" -> 12, "3.7" -> 3,
/// "0x1Ag" -> 26). Values beyond `i64` saturate.
pub(crate) fn parse_leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Whether `text` is an unsigned `0x`, `0o` or `0b` integer literal.
pub(crate) fn is_radix_literal(text: &str) -> bool {
    let radix = match text.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return false,
    };
    let digits = &text[2..];
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}
