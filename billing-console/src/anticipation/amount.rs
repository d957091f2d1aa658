//! pt-BR money input and display
//!
//! The form field uses `.` as thousands separator and `,` as decimal
//! separator (`"23.145,00"`). Display follows the BRL currency layout
//! (`R$ 23.145,00`, with a no-break space).

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};

const DECIMAL_PLACES: u32 = 2;
const CURRENCY_PREFIX: &str = "R$\u{a0}";

/// Strip thousands separators and turn the first decimal comma into a point
fn normalize(input: &str) -> String {
    input.replace('.', "").replacen(',', ".", 1)
}

/// Lenient parse used while the user is typing
///
/// Reads the leading numeric prefix after normalization, so `"12,5abc"`
/// gives `12.5`. An exponent suffix is honoured (`"1e3"` gives `1000`).
/// Empty, malformed and negative input all give zero, and so does any
/// value beyond the `Decimal` range (about `7.9e28`).
pub fn parse_brl_amount(input: &str) -> Decimal {
    let normalized = normalize(input);
    let text = normalized.trim_start();

    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let int_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    let frac_len = match rest[int_len..].strip_prefix('.') {
        Some(tail) => tail.bytes().take_while(|b| b.is_ascii_digit()).count(),
        None => 0,
    };
    if int_len == 0 && frac_len == 0 {
        return Decimal::ZERO;
    }

    let mantissa_end = if frac_len > 0 || rest[int_len..].starts_with('.') {
        int_len + 1 + frac_len
    } else {
        int_len
    };

    let mut number = String::with_capacity(int_len + frac_len + 2);
    if int_len == 0 {
        number.push('0');
    } else {
        number.push_str(&rest[..int_len]);
    }
    if frac_len > 0 {
        number.push('.');
        number.push_str(&rest[int_len + 1..mantissa_end]);
    }

    let value = match Decimal::from_str(&number) {
        Ok(value) if !negative => value,
        _ => return Decimal::ZERO,
    };
    match exponent(&rest[mantissa_end..]) {
        Some(exp) => scale(value, exp).unwrap_or(Decimal::ZERO),
        None => value,
    }
}

/// Exponent suffix such as `e3` or `E-2`, ignoring anything after its digits
fn exponent(tail: &str) -> Option<i64> {
    let tail = tail.strip_prefix(['e', 'E'])?;
    let sign_len = usize::from(tail.starts_with(['+', '-']));
    let digits = tail[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    // Saturate very long exponents; they overflow or underflow anyway
    let exp = tail[sign_len..sign_len + digits]
        .parse::<i64>()
        .unwrap_or(i64::MAX);
    Some(if tail.starts_with('-') { -exp } else { exp })
}

/// Multiply by `10^exp`; `None` when the result leaves the `Decimal` range
fn scale(value: Decimal, exp: i64) -> Option<Decimal> {
    const MAX_SHIFT: i64 = 64;

    if value.is_zero() || exp == 0 {
        return Some(value);
    }
    if exp > MAX_SHIFT {
        return None;
    }
    if exp < -MAX_SHIFT {
        return Some(Decimal::ZERO);
    }

    let mut result = value;
    for _ in 0..exp.unsigned_abs() {
        result = if exp > 0 {
            result.checked_mul(Decimal::TEN)?
        } else {
            result.checked_div(Decimal::TEN)?
        };
        if result.is_zero() {
            break;
        }
    }
    Some(result)
}

/// Strict parse used when a request is submitted
///
/// The whole field must be a non-negative number.
pub fn parse_brl_strict(input: &str) -> AppResult<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::AnticipationValueRequired,
            "Informe o valor da antecipação",
        ));
    }

    match Decimal::from_str(&normalize(trimmed)) {
        Ok(value) if !value.is_sign_negative() => Ok(value),
        _ => Err(
            AppError::with_message(ErrorCode::InvalidAmount, format!("Valor inválido: {}", trimmed))
                .with_detail("value", trimmed),
        ),
    }
}

/// Format an amount as BRL, rounding half away from zero to cents
pub fn format_brl(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}{}{},{}", sign, CURRENCY_PREFIX, grouped, frac_part)
}
