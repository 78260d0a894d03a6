use crate::length::distance::Distance;
use crate::length::error::ParseError;
use crate::length::units::lookup_unit;
use log::debug;

/// Parse a distance string such as `"300m"`, `"-1.5ly"` or `"5ft11in"`.
///
/// A distance is an optional sign followed by one or more terms, each a
/// decimal number with an optional fraction and a unit suffix. Terms are
/// summed and the sign applies to the total. The bare string `"0"` is the
/// only input accepted without a unit.
///
/// Valid units are `nm`, `um` (or `µm`/`μm`), `mm`, `cm`, `m`, `km`,
/// `in`, `ft`, `yd`, `mi`, `ly`.
pub fn parse_distance(input: &str) -> Result<Distance, ParseError> {
    parse_terms(input).inspect_err(|e| debug!("rejected distance: {}", e))
}

fn parse_terms(input: &str) -> Result<Distance, ParseError> {
    if input == "0" {
        return Ok(Distance::ZERO);
    }

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s.is_empty() {
        return Err(ParseError::invalid(input));
    }

    let mut total = 0.0_f64;
    while !s.is_empty() {
        // The next character must start a number
        if !starts_number(s) {
            return Err(ParseError::invalid(input));
        }

        // Integer part
        let (whole, rest) = leading_int(s).ok_or_else(|| ParseError::overflow(input))?;
        let pre = rest.len() != s.len();
        s = rest;

        // Fractional part
        let mut fraction = 0_u64;
        let mut scale = 1.0_f64;
        let mut post = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (numerator, denominator, after) = leading_fraction(rest);
            post = after.len() != rest.len();
            fraction = numerator;
            scale = denominator;
            s = after;
        }
        if !pre && !post {
            // no digits (e.g. ".ly" or "-.ly")
            return Err(ParseError::invalid(input));
        }

        // Unit suffix
        let unit_len = s
            .bytes()
            .position(|b| b == b'.' || b.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(ParseError::missing_unit(input));
        }
        let (suffix, rest) = s.split_at(unit_len);
        let unit = lookup_unit(suffix).ok_or_else(|| ParseError::unknown_unit(suffix, input))?;
        s = rest;

        let term = term_value(whole, fraction, scale, unit.as_nanometers())
            .ok_or_else(|| ParseError::overflow(input))?;
        total = checked_accumulate(total, term).ok_or_else(|| ParseError::overflow(input))?;
    }

    if negative {
        total = -total;
    }
    Ok(Distance::from_nanometers(total))
}

fn starts_number(s: &str) -> bool {
    matches!(s.as_bytes().first(), Some(b) if *b == b'.' || b.is_ascii_digit())
}

/// Consume leading ASCII digits as an integer. `None` means the digits do
/// not fit in a `u64`.
pub(crate) fn leading_int(s: &str) -> Option<(u64, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value = 0_u64;
    for b in s[..digits].bytes() {
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(b - b'0'))?;
    }
    Some((value, &s[digits..]))
}

/// Consume leading ASCII digits as the fraction `numerator / scale`.
/// Digits past what a `u64` numerator can hold are consumed but ignored,
/// so very long fractions lose precision instead of failing.
pub(crate) fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut numerator = 0_u64;
    let mut scale = 1.0_f64;
    let mut saturated = false;
    for b in s[..digits].bytes() {
        if saturated {
            continue;
        }
        match numerator
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(b - b'0')))
        {
            Some(next) => {
                numerator = next;
                scale *= 10.0;
            }
            None => saturated = true,
        }
    }
    (numerator, scale, &s[digits..])
}

/// Value of one term in nanometers: `whole * unit + fraction * (unit / scale)`.
/// `None` once any step leaves the finite `f64` range.
pub(crate) fn term_value(whole: u64, fraction: u64, scale: f64, unit: f64) -> Option<f64> {
    let mut value = finite(whole as f64 * unit)?;
    if fraction > 0 {
        value = finite(value + finite(fraction as f64 * (unit / scale))?)?;
    }
    Some(value)
}

pub(crate) fn checked_accumulate(total: f64, term: f64) -> Option<f64> {
    finite(total + term)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
