//! # Julian Date Conversion
//!
//! Converts between a Julian Date (fractional days since noon, November 24,
//! 4714 BC, proleptic Gregorian) and calendar components.
//!
//! The conversion first scales the Julian Date to whole milliseconds
//! (`iJD`) and does everything else in integer arithmetic, so late-stage
//! floating error never moves a result across a day boundary. The
//! civil-from-Julian derivation is SQLite's `computeYMD` sequence and its
//! constants and truncation order must stay exactly as written.
//!
//! ```text
//! julian_date ──x86_400_000 +0.5──> iJD (ms)
//!                                    │
//!          ┌─────────────────────────┴─────────────────────────┐
//!          │ Z = (iJD + 12h) / 1 day                           │ s = (iJD + 12h) mod 1 day
//!          ▼                                                   ▼
//!   year / month / day                           hour / minute / second / ms
//! ```
//!
//! ## Examples
//!
//! | Julian Date | Calendar |
//! |-------------|----------|
//! | 2451545.0 | 2000-01-01 12:00:00.000 |
//! | 2440587.5 | 1970-01-01 00:00:00.000 |

use crate::config::{
    DAYS_PER_CENTURY, GREGORIAN_SHIFT_JD, HALF_DAY_MS, MAX_YEAR, MIN_YEAR, MS_PER_DAY,
    MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
use crate::error::range_failure;
use eyre::Result;
use time::{Date, Month, PrimitiveDateTime, Time};

/// Largest `iJD` SQLite accepts (9999-12-31 23:59:59.999).
const MAX_IJD: i64 = 464_269_060_799_999;

/// Calendar components of a decoded Julian Date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl CalendarDateTime {
    pub fn to_primitive(&self) -> Result<PrimitiveDateTime> {
        let month = Month::try_from(self.month)
            .map_err(|e| range_failure(format!("month {} out of range: {}", self.month, e)))?;
        let date = Date::from_calendar_date(self.year, month, self.day).map_err(|e| {
            range_failure(format!(
                "{:04}-{:02}-{:02} is not a valid date: {}",
                self.year, self.month, self.day, e
            ))
        })?;
        let time = Time::from_hms_milli(self.hour, self.minute, self.second, self.millisecond)
            .map_err(|e| range_failure(format!("invalid time of day: {}", e)))?;
        Ok(PrimitiveDateTime::new(date, time))
    }
}

/// Scales a Julian Date to milliseconds with half-up rounding.
fn julian_to_ms(julian_date: f64) -> Result<i64> {
    let scaled = julian_date * MS_PER_DAY as f64 + 0.5;
    let ijd = if scaled.is_finite() && scaled >= 0.0 {
        scaled as i64
    } else {
        -1
    };
    if !(0..=MAX_IJD).contains(&ijd) {
        return Err(range_failure(format!(
            "julian date {} is outside the representable calendar",
            julian_date
        )));
    }
    Ok(ijd)
}

/// Decodes a Julian Date into calendar components.
pub fn to_calendar(julian_date: f64) -> Result<CalendarDateTime> {
    let ijd = julian_to_ms(julian_date)?;

    let z = (ijd + HALF_DAY_MS) / MS_PER_DAY;
    let a = ((z as f64 - GREGORIAN_SHIFT_JD) / DAYS_PER_CENTURY) as i64;
    let a = z + 1 + a - (a / 4);
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25) as i64;
    let d = (36525 * (c & 32767)) / 100;
    let e = ((b - d) as f64 / 30.6001) as i64;
    let x1 = (30.6001 * e as f64) as i64;
    let day = b - d - x1;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    if year < MIN_YEAR as i64 || year > MAX_YEAR as i64 {
        return Err(range_failure(format!(
            "julian date {} decodes to year {}, outside {}..={}",
            julian_date, year, MIN_YEAR, MAX_YEAR
        )));
    }

    let mut s = (ijd + HALF_DAY_MS) % MS_PER_DAY;
    let hour = s / MS_PER_HOUR;
    s -= hour * MS_PER_HOUR;
    let minute = s / MS_PER_MINUTE;
    s -= minute * MS_PER_MINUTE;
    let second = s / MS_PER_SECOND;
    let millisecond = s - second * MS_PER_SECOND;

    Ok(CalendarDateTime {
        year: year as i32,
        month: month as u8,
        day: day as u8,
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
        millisecond: millisecond as u16,
    })
}

/// Decodes a Julian Date into a `PrimitiveDateTime`.
pub fn julian_to_datetime(julian_date: f64) -> Result<PrimitiveDateTime> {
    to_calendar(julian_date)?.to_primitive()
}

/// Encodes a date-time as a Julian Date (SQLite's `computeJD`).
///
/// Sub-millisecond precision is rounded half-up to the nearest millisecond.
pub fn datetime_to_julian(datetime: PrimitiveDateTime) -> f64 {
    let mut y = datetime.year() as i64;
    let mut m = u8::from(datetime.month()) as i64;
    let d = datetime.day() as i64;
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let a = y / 100;
    let b = 2 - a + (a / 4);
    let x1 = 36525 * (y + 4716) / 100;
    let x2 = 306001 * (m + 1) / 10000;
    // (N - 1524.5) days, kept in integer milliseconds.
    let mut ijd = (x1 + x2 + d + b - 1524) * MS_PER_DAY - HALF_DAY_MS;

    let millis = (datetime.nanosecond() as i64 + 500_000) / 1_000_000;
    ijd += datetime.hour() as i64 * MS_PER_HOUR
        + datetime.minute() as i64 * MS_PER_MINUTE
        + datetime.second() as i64 * MS_PER_SECOND
        + millis;

    ijd as f64 / MS_PER_DAY as f64
}
