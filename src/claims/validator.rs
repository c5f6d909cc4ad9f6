use crate::claims::NumericDate;
use crate::error::{Error, Result};
use serde_json::{Number, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// A temporal claim as read from the payload, before comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Timestamp {
    Absent,
    /// Present, but not a number that fits whole `i64` seconds
    Unreadable,
    Seconds(i64),
}

impl Timestamp {
    pub(crate) fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Timestamp::Absent,
            Some(Value::Number(number)) => number_to_seconds(number)
                .map(Timestamp::Seconds)
                .unwrap_or(Timestamp::Unreadable),
            Some(_) => Timestamp::Unreadable,
        }
    }

    pub(crate) fn from_date(date: Option<&NumericDate>) -> Self {
        match date {
            None => Timestamp::Absent,
            Some(date) => date
                .seconds()
                .map(Timestamp::Seconds)
                .unwrap_or(Timestamp::Unreadable),
        }
    }
}

/// Coerce any JSON number to whole seconds
///
/// Integers are taken as-is. Floats and long decimals are truncated toward
/// zero from their decimal text, so no digit is rounded away first. Numbers
/// whose integer part does not fit an `i64` yield `None`.
pub(crate) fn number_to_seconds(number: &Number) -> Option<i64> {
    if let Some(seconds) = number.as_i64() {
        return Some(seconds);
    }

    truncate_decimal(&number.to_string())
}

/// Integer part of a JSON number literal such as `-1.30081944e9`
fn truncate_decimal(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit());
    if integer.is_empty() || !all_digits {
        return None;
    }

    // All significant digits, and where the decimal point falls among them
    let digits = format!("{integer}{fraction}");
    let significant = digits.trim_start_matches('0');
    let leading_zeros = (digits.len() - significant.len()) as i64;
    let point = (integer.len() as i64)
        .checked_add(exponent)?
        .checked_sub(leading_zeros)?;

    if significant.is_empty() || point <= 0 {
        return Some(0);
    }
    // i64::MAX has 19 digits
    if point > 19 {
        return None;
    }

    let point = point as usize;
    let whole = if point <= significant.len() {
        significant[..point].to_string()
    } else {
        format!("{significant}{}", "0".repeat(point - significant.len()))
    };
    let magnitude = whole.parse::<i128>().ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// `now < exp`
pub(crate) fn verify_expires_at(exp: Timestamp, now: i64, required: bool) -> bool {
    match exp {
        Timestamp::Absent => !required,
        Timestamp::Unreadable => false,
        Timestamp::Seconds(exp) => now < exp,
    }
}

/// `now >= nbf`
pub(crate) fn verify_not_before(nbf: Timestamp, now: i64, required: bool) -> bool {
    match nbf {
        Timestamp::Absent => !required,
        Timestamp::Unreadable => false,
        Timestamp::Seconds(nbf) => now >= nbf,
    }
}

/// `iat <= now`
pub(crate) fn verify_issued_at(iat: Timestamp, now: i64, required: bool) -> bool {
    match iat {
        Timestamp::Absent => !required,
        Timestamp::Unreadable => false,
        Timestamp::Seconds(iat) => iat <= now,
    }
}

/// Run the temporal checks in their fixed order: expiry, issued-at,
/// not-before. None of them is required; the first failure wins.
pub(crate) fn validate_timestamps(
    exp: Timestamp,
    iat: Timestamp,
    nbf: Timestamp,
    now: i64,
) -> Result<()> {
    if !verify_expires_at(exp, now, false) {
        return Err(Error::Expired);
    }

    if !verify_issued_at(iat, now, false) {
        return Err(Error::UsedBeforeIssued);
    }

    if !verify_not_before(nbf, now, false) {
        return Err(Error::NotYetValid);
    }

    Ok(())
}

/// Get current Unix timestamp
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}
