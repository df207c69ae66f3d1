//! Operand text normalization, parsing, and result formatting
//!
//! Typed operands are kept as text until they are committed. Normalization
//! turns that text into something `f64::from_str` accepts; formatting turns
//! a computed value back into display text.

use crate::config::{EngineConfig, TrailingDecimal};
use crate::error::{CalcError, CalcResult};

/// Normalizes raw operand text
///
/// Pipeline, in order:
/// 1. every `,` becomes `.`
/// 2. every `.` after the first is deleted (`"12.34.56"` -> `"12.3456"`)
/// 3. a leading `.` gets a `0` in front (after any sign)
/// 4. a trailing `.` is stripped or padded per `policy`
#[must_use]
pub fn normalize(raw: &str, policy: TrailingDecimal) -> String {
    let unified = raw.replace(',', ".");

    let mut text = match unified.find('.') {
        Some(idx) => {
            let (before, after) = unified.split_at(idx + 1);
            format!("{before}{}", after.replace('.', ""))
        }
        None => unified,
    };

    let sign_len = usize::from(text.starts_with(['+', '-']));
    if text[sign_len..].starts_with('.') {
        text.insert(sign_len, '0');
    }

    if text.ends_with('.') {
        match policy {
            TrailingDecimal::Strip => {
                text.pop();
            }
            TrailingDecimal::PadZero => text.push('0'),
        }
    }

    text
}

/// Parses operand text with the default configuration
pub fn parse_number(raw: &str) -> CalcResult<f64> {
    parse_number_with(raw, &EngineConfig::default())
}

/// Parses operand text under `config`
///
/// Fails with [`CalcError::InputTooLong`] when the raw text exceeds the
/// configured parse length, and with [`CalcError::InvalidNumber`] when the
/// normalized text is empty or is not a plain decimal literal.
pub fn parse_number_with(raw: &str, config: &EngineConfig) -> CalcResult<f64> {
    if let Some(max) = config.max_parse_len() {
        let len = raw.chars().count();
        if len > max {
            return Err(CalcError::InputTooLong { len, max });
        }
    }

    let normalized = normalize(raw, config.trailing_decimal);
    if !is_decimal_literal(&normalized) {
        return Err(CalcError::InvalidNumber(raw.to_string()));
    }

    normalized
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(raw.to_string()))
}

/// Optional sign, digits, at most one `.`, and at least one digit
///
/// `f64::from_str` also takes `inf`, `NaN` and exponents, none of which a
/// keypad can produce.
fn is_decimal_literal(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in body.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Formats a computed result for display
///
/// Integral values render without a fractional part; everything else is
/// rounded to two places, halves away from zero (`0.125` -> `"0.13"`). The
/// separator is always `.`.
#[must_use]
pub fn format_result(result: f64) -> String {
    if result == result.trunc() {
        if result == 0.0 {
            return "0".to_string();
        }
        return format!("{result}");
    }

    let magnitude = round_half_up_cents(&format!("{}", result.abs()));
    if result < 0.0 && magnitude != "0.00" {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Rounds a non-negative decimal string to two places, ties upward
///
/// Works on the shortest round-trip text of the value, so `1.005` rounds to
/// `1.01` even though the nearest `f64` sits just below it.
fn round_half_up_cents(repr: &str) -> String {
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr, ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain((0..2).map(|i| frac.get(i).copied().unwrap_or(b'0')))
        .map(|b| b - b'0')
        .collect();

    if frac.get(2).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    format!("{}.{}", render(&digits[..split]), render(&digits[split..]))
}
