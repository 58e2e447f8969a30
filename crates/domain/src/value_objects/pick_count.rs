//! Pick-count input handling
//!
//! A zone's pick count is either the user's raw override text or the zone's
//! default. Resolution never clamps: an out-of-bounds value is passed through
//! so the count validator can reject it with a precise message.

use serde::{Deserialize, Serialize};

use super::numeric::{is_radix_literal, parse_leading_integer};
use crate::zone::ZoneConfig;

/// Resolve the effective pick count for a zone.
///
/// Blank, non-numeric or non-finite text falls back to `zone.default_count`.
/// Decimal numbers and unsigned `0x`/`0o`/`0b` literals count as numeric.
/// Otherwise the integer part of the text is returned verbatim, even when it
/// is negative or above `max_count`.
pub fn resolve_count(custom_count_text: &str, zone: &ZoneConfig) -> i64 {
    let default = i64::from(zone.default_count);
    let trimmed = custom_count_text.trim();
    if trimmed.is_empty() {
        return default;
    }

    let numeric = match trimmed.parse::<f64>() {
        Ok(value) => value.is_finite(),
        Err(_) => is_radix_literal(trimmed),
    };
    if !numeric {
        return default;
    }
    parse_leading_integer(trimmed).unwrap_or(default)
}

/// Whether text may be typed into a count field: empty or ASCII digits only.
pub fn accepts_count_input(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Direction of a count stepper press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    Up,
    Down,
}

/// Apply a stepper press to the current count text.
///
/// The current value is the text's integer, or the zone default when the
/// text is blank, unparseable or zero. Returns the new text, or `None` when
/// the press would leave `[min_count, max_count]`.
pub fn step_count(current_text: &str, zone: &ZoneConfig, step: Step) -> Option<String> {
    let current = parse_leading_integer(current_text)
        .filter(|&value| value != 0)
        .unwrap_or_else(|| i64::from(zone.default_count));

    match step {
        Step::Up if current < i64::from(zone.max_count) => Some((current + 1).to_string()),
        Step::Down if current > i64::from(zone.min_count) => Some((current - 1).to_string()),
        _ => None,
    }
}
