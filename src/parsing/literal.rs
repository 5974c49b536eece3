//! # Text Literal Parsing
//!
//! Parsing rules for cells whose requested type is read from text.
//!
//! ## Supported Grammars
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Decimal | `[sign] digits [. digits] [(e\|E) [sign] digits]` | `-12.50`, `1.5E10` |
//! | GUID | hyphenated, simple, braced or `urn:uuid:` | `550e8400-e29b-41d4-a716-446655440000` |
//! | Time span | `[-] d` or `[-] [d.]hh:mm[:ss[.fffffff]]` | `1.02:03:04.5`, `00:30` |
//!
//! A decimal exponent is applied exactly; results with more than 28
//! fractional digits are rounded half away from zero, and results past
//! `Decimal::MAX` are format failures.
//!
//! Leading and trailing whitespace is ignored. All grammars are
//! culture-invariant: `.` is the only decimal separator.
//!
//! ## Error Handling
//!
//! Every function returns `eyre::Result`; text that does not match the
//! grammar is a format failure:
//!
//! ```text
//! "format failure: invalid decimal 'abc': expected [sign] digits [. digits] [e [sign] digits]"
//! "format failure: invalid time span '25:00': hours must be 0-23"
//! ```

use crate::config::MAX_SPAN_FRACTION_DIGITS;
use crate::error::format_failure;
use eyre::Result;
use rust_decimal::Decimal;
use std::str::FromStr;
use time::Duration;
use uuid::Uuid;

const SECS_PER_DAY: i64 = 86_400;

/// Largest day count the duration grammar accepts.
const MAX_SPAN_DAYS: i64 = 10_675_199;

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Splits decimal text into mantissa and exponent, or `None` when the text
/// does not match `[sign] digits [. digits] [(e|E) [sign] digits]`.
fn split_decimal(text: &str) -> Option<(&str, Option<&str>)> {
    let bytes = text.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = digits(pos);
    if int_digits == 0 {
        return None;
    }
    pos += int_digits;
    if bytes.get(pos) == Some(&b'.') {
        let frac_digits = digits(pos + 1);
        if frac_digits == 0 {
            return None;
        }
        pos += 1 + frac_digits;
    }
    if pos == bytes.len() {
        return Some((text, None));
    }
    if !matches!(bytes[pos], b'e' | b'E') {
        return None;
    }
    let exp_start = pos + 1;
    let sign = usize::from(matches!(bytes.get(exp_start), Some(b'+' | b'-')));
    let exp_digits = digits(exp_start + sign);
    if exp_digits == 0 || exp_start + sign + exp_digits != bytes.len() {
        return None;
    }
    Some((&text[..pos], Some(&text[exp_start..])))
}

/// Applies a power-of-ten exponent, rounding half away from zero once the
/// scale would pass `MAX_DECIMAL_SCALE`.
fn scale_decimal(mantissa: Decimal, exponent: i64) -> Option<Decimal> {
    let digits = mantissa.mantissa();
    let scale = i64::from(mantissa.scale()) - exponent;

    if scale < 0 {
        let factor = 10i128.checked_pow(u32::try_from(-scale).ok()?)?;
        return Decimal::try_from_i128_with_scale(digits.checked_mul(factor)?, 0).ok();
    }
    if scale <= i64::from(MAX_DECIMAL_SCALE) {
        return Decimal::try_from_i128_with_scale(digits, scale as u32).ok();
    }

    let excess = scale - i64::from(MAX_DECIMAL_SCALE);
    let Some(divisor) = u32::try_from(excess).ok().and_then(|e| 10i128.checked_pow(e)) else {
        return Some(Decimal::ZERO);
    };
    let mut rounded = digits / divisor;
    if (digits % divisor).abs() * 2 >= divisor {
        rounded += digits.signum();
    }
    Decimal::try_from_i128_with_scale(rounded, MAX_DECIMAL_SCALE).ok()
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    let text = s.trim();
    let invalid = |what: String| format_failure(format!("invalid decimal '{}': {}", s, what));

    let (mantissa, exponent) =
        split_decimal(text).ok_or_else(|| invalid("expected [sign] digits [. digits] [e [sign] digits]".into()))?;
    let value = Decimal::from_str(mantissa.strip_prefix('+').unwrap_or(mantissa)).map_err(|e| invalid(e.to_string()))?;
    let Some(exponent) = exponent else {
        return Ok(value);
    };

    // Saturated exponents still overflow or underflow in `scale_decimal`.
    let exponent = exponent.parse::<i64>().unwrap_or(if exponent.starts_with('-') {
        i64::MIN / 2
    } else {
        i64::MAX / 2
    });
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    scale_decimal(value, exponent).ok_or_else(|| invalid("exponent overflows the decimal range".into()))
}

pub fn parse_guid(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s.trim()).map_err(|e| format_failure(format!("invalid GUID '{}': {}", s, e)))
}

pub fn parse_time_span(s: &str) -> Result<Duration> {
    let text = s.trim();
    let invalid = |what: &str| format_failure(format!("invalid time span '{}': {}", s, what));

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return Err(invalid("empty"));
    }

    let (days_part, clock_part) = match body.find(':') {
        None => (Some(body), None),
        Some(colon) => match body[..colon].find('.') {
            Some(dot) => (Some(&body[..dot]), Some(&body[dot + 1..])),
            None => (None, Some(body)),
        },
    };

    let days = match days_part {
        Some(d) => parse_component(d, 8).ok_or_else(|| invalid("invalid day count"))?,
        None => 0,
    };
    if days > MAX_SPAN_DAYS {
        return Err(invalid("day count out of range"));
    }

    let mut seconds = days * SECS_PER_DAY;
    let mut nanos: i64 = 0;

    if let Some(clock) = clock_part {
        let (hms, fraction) = match clock.split_once('.') {
            Some((hms, frac)) => (hms, Some(frac)),
            None => (clock, None),
        };
        let fields: Vec<&str> = hms.split(':').collect();
        if fields.len() < 2 || fields.len() > 3 {
            return Err(invalid("expected hh:mm or hh:mm:ss"));
        }
        if fraction.is_some() && fields.len() != 3 {
            return Err(invalid("fractional seconds require hh:mm:ss"));
        }

        let hours = parse_component(fields[0], 2).ok_or_else(|| invalid("invalid hours"))?;
        let minutes = parse_component(fields[1], 2).ok_or_else(|| invalid("invalid minutes"))?;
        let secs = match fields.get(2) {
            Some(f) => parse_component(f, 2).ok_or_else(|| invalid("invalid seconds"))?,
            None => 0,
        };
        if hours > 23 {
            return Err(invalid("hours must be 0-23"));
        }
        if minutes > 59 {
            return Err(invalid("minutes must be 0-59"));
        }
        if secs > 59 {
            return Err(invalid("seconds must be 0-59"));
        }
        seconds += hours * 3600 + minutes * 60 + secs;

        if let Some(frac) = fraction {
            let ticks = parse_component(frac, MAX_SPAN_FRACTION_DIGITS)
                .ok_or_else(|| invalid("invalid fractional seconds"))?;
            let scale = 10i64.pow((MAX_SPAN_FRACTION_DIGITS - frac.len()) as u32);
            nanos = ticks * scale * 100;
        }
    }

    let span = Duration::new(seconds, nanos as i32);
    Ok(if negative { -span } else { span })
}

/// Parses 1..=`max_digits` ASCII digits.
fn parse_component(s: &str, max_digits: usize) -> Option<i64> {
    if s.is_empty() || s.len() > max_digits || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;

    fn kind_of(err: eyre::Report) -> Option<DecodeErrorKind> {
        DecodeErrorKind::of(&err)
    }

    #[test]
    fn test_decimal_plain() {
        assert_eq!(parse_decimal("12.50").unwrap(), Decimal::new(1250, 2));
        assert_eq!(parse_decimal(" -3 ").unwrap(), Decimal::from(-3));
    }

    #[test]
    fn test_decimal_exponent() {
        assert_eq!(
            parse_decimal("1.5E10").unwrap(),
            Decimal::from(15_000_000_000i64)
        );
        assert_eq!(parse_decimal("25e-1").unwrap(), Decimal::new(25, 1));
    }

    #[test]
    fn test_decimal_rejects_garbage() {
        for bad in ["", "abc", "1,5", "1.5E", "1_000", "1e1_0", ".5", "5.", "1.5E+", "0x10", "1e5x"] {
            assert_eq!(
                kind_of(parse_decimal(bad).unwrap_err()),
                Some(DecodeErrorKind::Format),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_decimal_small_exponent_rounds_like_plain_text() {
        assert_eq!(parse_decimal("1.5E-30").unwrap(), Decimal::ZERO);
        assert_eq!(
            parse_decimal("1.5E-27").unwrap(),
            Decimal::from_i128_with_scale(15, 28)
        );
        assert_eq!(
            parse_decimal("1.26E-27").unwrap(),
            Decimal::from_i128_with_scale(13, 28)
        );
        assert_eq!(
            parse_decimal("-1.26E-27").unwrap(),
            Decimal::from_i128_with_scale(-13, 28)
        );
        assert_eq!(parse_decimal("1.0e-99999999999999999999").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_large_exponent() {
        assert_eq!(
            parse_decimal("7.9E27").unwrap(),
            Decimal::from_i128_with_scale(79, 0) * Decimal::from(10u64.pow(13)) * Decimal::from(10u64.pow(13))
        );
        assert_eq!(parse_decimal("0e400").unwrap(), Decimal::ZERO);
        for overflow in ["1e29", "8e28", "1e99999999999999999999"] {
            assert_eq!(
                kind_of(parse_decimal(overflow).unwrap_err()),
                Some(DecodeErrorKind::Format),
                "{:?}",
                overflow
            );
        }
    }

    #[test]
    fn test_guid_forms() {
        let expected = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(parse_guid("550e8400-e29b-41d4-a716-446655440000").unwrap(), expected);
        assert_eq!(parse_guid("550E8400E29B41D4A716446655440000").unwrap(), expected);
        assert_eq!(parse_guid("{550e8400-e29b-41d4-a716-446655440000}").unwrap(), expected);
    }

    #[test]
    fn test_guid_rejects_garbage() {
        assert_eq!(
            kind_of(parse_guid("not-a-guid").unwrap_err()),
            Some(DecodeErrorKind::Format)
        );
    }

    #[test]
    fn test_time_span_clock() {
        assert_eq!(parse_time_span("00:30").unwrap(), Duration::minutes(30));
        assert_eq!(
            parse_time_span("01:02:03").unwrap(),
            Duration::seconds(3600 + 120 + 3)
        );
    }

    #[test]
    fn test_time_span_days_and_fraction() {
        let span = parse_time_span("1.02:03:04.5").unwrap();
        assert_eq!(
            span,
            Duration::days(1)
                + Duration::hours(2)
                + Duration::minutes(3)
                + Duration::seconds(4)
                + Duration::milliseconds(500)
        );
        assert_eq!(
            parse_time_span("00:00:00.0000001").unwrap(),
            Duration::nanoseconds(100)
        );
    }

    #[test]
    fn test_time_span_days_only_and_negative() {
        assert_eq!(parse_time_span("3").unwrap(), Duration::days(3));
        assert_eq!(parse_time_span("-00:00:01").unwrap(), Duration::seconds(-1));
        assert_eq!(
            parse_time_span("-1.12:00").unwrap(),
            -(Duration::days(1) + Duration::hours(12))
        );
    }

    #[test]
    fn test_time_span_rejects_garbage() {
        for bad in [
            "",
            "-",
            "24:00",
            "00:60",
            "00:00:60",
            "1:2:3:4",
            "00:00.5",
            "abc",
            "00:00:00.12345678",
            "99999999",
        ] {
            assert_eq!(
                kind_of(parse_time_span(bad).unwrap_err()),
                Some(DecodeErrorKind::Format),
                "{:?}",
                bad
            );
        }
    }
}
