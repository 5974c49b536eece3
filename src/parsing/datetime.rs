//! # Date-Time Text Grammar
//!
//! The fixed, culture-invariant grammar used when a date-time cell is stored
//! as text:
//!
//! ```text
//! datetime := date [ ('T' | ' ') time ] [ [' '] offset ]
//! date     := YYYY ('-' | '/') MM ('-' | '/') DD
//! time     := hh ':' mm [ ':' ss [ '.' fraction ] ]      fraction: 1-9 digits
//! offset   := 'Z' | ('+' | '-') hh [':'] mm
//! ```
//!
//! | Input | Result |
//! |-------|--------|
//! | `2024-01-15` | 2024-01-15 00:00:00 |
//! | `2024-01-15 13:45:30.25` | 2024-01-15 13:45:30.250 |
//! | `2024-01-15T13:45:30Z` | 2024-01-15 13:45:30 +00:00 |
//! | `2024-01-15T13:45+02:00` | 2024-01-15 13:45:00 +02:00 |
//!
//! Offset-free values read as `OffsetDateTime` carry a zero offset. Values
//! read as `PrimitiveDateTime` are normalized to UTC when an offset is given.

use crate::config::{MAX_DATETIME_FRACTION_DIGITS, MAX_YEAR, MIN_YEAR};
use crate::error::{format_failure, range_failure};
use eyre::Result;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// A parsed date-time and the offset it was written with, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDateTime {
    pub datetime: PrimitiveDateTime,
    pub offset: Option<UtcOffset>,
}

struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_any(&mut self, bytes: &[u8]) -> Option<u8> {
        let b = self.peek().filter(|b| bytes.contains(b))?;
        self.pos += 1;
        Some(b)
    }

    /// Reads between `min` and `max` ASCII digits. Returns the value and count.
    fn digits(&mut self, min: usize, max: usize) -> Option<(u32, usize)> {
        let start = self.pos;
        let mut value: u32 = 0;
        while self.pos - start < max {
            match self.peek() {
                Some(b @ b'0'..=b'9') => {
                    value = value * 10 + (b - b'0') as u32;
                    self.pos += 1;
                }
                _ => break,
            }
        }
        let count = self.pos - start;
        if count < min {
            self.pos = start;
            return None;
        }
        Some((value, count))
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }
}

/// Parses `s` with the date-time grammar.
pub fn parse_datetime_text(s: &str) -> Result<ParsedDateTime> {
    let text = s.trim();
    let invalid = |what: &str| format_failure(format!("invalid date-time '{}': {}", s, what));
    let mut sc = Scanner::new(text);

    let (year, _) = sc.digits(4, 4).ok_or_else(|| invalid("expected 4-digit year"))?;
    let sep = sc
        .eat_any(b"-/")
        .ok_or_else(|| invalid("expected '-' or '/' after year"))?;
    let (month, _) = sc.digits(1, 2).ok_or_else(|| invalid("expected month"))?;
    if !sc.eat(sep) {
        return Err(invalid("mismatched date separator"));
    }
    let (day, _) = sc.digits(1, 2).ok_or_else(|| invalid("expected day"))?;

    if !(MIN_YEAR as u32..=MAX_YEAR as u32).contains(&year) {
        return Err(invalid("year out of range"));
    }
    let month = Month::try_from(month as u8).map_err(|e| invalid(&e.to_string()))?;
    let date = Date::from_calendar_date(year as i32, month, day as u8)
        .map_err(|e| invalid(&e.to_string()))?;

    let mut time = Time::MIDNIGHT;
    if sc.eat_any(b"Tt ").is_some() {
        if sc.peek().is_some_and(|b| b.is_ascii_digit()) {
            time = parse_time_of_day(&mut sc).map_err(|what| invalid(&what))?;
        } else {
            // A lone space may introduce the offset instead of a time.
            sc.pos -= 1;
        }
    }

    sc.eat(b' ');
    let offset = parse_offset(&mut sc).map_err(|what| invalid(&what))?;

    if !sc.at_end() {
        return Err(invalid("unexpected trailing characters"));
    }

    Ok(ParsedDateTime {
        datetime: PrimitiveDateTime::new(date, time),
        offset,
    })
}

fn parse_time_of_day(sc: &mut Scanner<'_>) -> std::result::Result<Time, String> {
    let (hour, _) = sc.digits(1, 2).ok_or("expected hour")?;
    if !sc.eat(b':') {
        return Err("expected ':' after hour".to_string());
    }
    let (minute, _) = sc.digits(2, 2).ok_or("expected 2-digit minute")?;
    let mut second = 0;
    let mut nanos = 0;
    if sc.eat(b':') {
        second = sc.digits(2, 2).ok_or("expected 2-digit second")?.0;
        if sc.eat(b'.') {
            let (frac, count) = sc
                .digits(1, MAX_DATETIME_FRACTION_DIGITS)
                .ok_or("expected fractional seconds")?;
            nanos = frac * 10u32.pow((MAX_DATETIME_FRACTION_DIGITS - count) as u32);
        }
    }
    Time::from_hms_nano(hour as u8, minute as u8, second as u8, nanos).map_err(|e| e.to_string())
}

fn parse_offset(sc: &mut Scanner<'_>) -> std::result::Result<Option<UtcOffset>, String> {
    if sc.eat_any(b"Zz").is_some() {
        return Ok(Some(UtcOffset::UTC));
    }
    let sign = match sc.eat_any(b"+-") {
        Some(b'-') => -1,
        Some(_) => 1,
        None => return Ok(None),
    };
    let (hours, _) = sc.digits(2, 2).ok_or("expected 2-digit offset hours")?;
    sc.eat(b':');
    let (minutes, _) = sc.digits(2, 2).ok_or("expected 2-digit offset minutes")?;
    if hours > 14 || minutes > 59 {
        return Err(format!("offset {:02}:{:02} out of range", hours, minutes));
    }
    UtcOffset::from_hms(sign * hours as i8, sign * minutes as i8, 0)
        .map(Some)
        .map_err(|e| e.to_string())
}

/// Parses a date-time, normalizing any explicit offset to UTC.
pub fn parse_datetime(s: &str) -> Result<PrimitiveDateTime> {
    let parsed = parse_datetime_text(s)?;
    let Some(offset) = parsed.offset else {
        return Ok(parsed.datetime);
    };
    match parsed
        .datetime
        .assume_offset(offset)
        .checked_to_offset(UtcOffset::UTC)
    {
        Some(utc) if (MIN_YEAR..=MAX_YEAR).contains(&utc.year()) => {
            Ok(PrimitiveDateTime::new(utc.date(), utc.time()))
        }
        _ => Err(range_failure(format!(
            "date-time '{}' falls outside the calendar range in UTC",
            s
        ))),
    }
}

/// Parses a date-time keeping its offset; offset-free text reads as UTC.
pub fn parse_datetime_offset(s: &str) -> Result<OffsetDateTime> {
    let parsed = parse_datetime_text(s)?;
    Ok(parsed
        .datetime
        .assume_offset(parsed.offset.unwrap_or(UtcOffset::UTC)))
}
