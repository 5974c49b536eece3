//! # rowcast Configuration Constants
//!
//! This module centralizes the numeric constants shared by the Julian Date
//! converter, the text grammars and the probe adapters. Constants that depend
//! on each other are co-located and tied together with compile-time
//! assertions.
//!
//! ## Dependency Graph
//!
//! ```text
//! MS_PER_DAY (86,400,000)
//!       │
//!       ├─> HALF_DAY_MS (derived: MS_PER_DAY / 2)
//!       │     Julian days start at noon; adding half a day moves the
//!       │     anchor to midnight before the day/time split.
//!       │
//!       └─> MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND
//!             Successive divisors used to decompose the time of day.
//!
//! MIN_YEAR (1) ..= MAX_YEAR (9999)
//!       │
//!       └─> Calendar range a decoded date-time must fall into.
//! ```
//!
//! ## Critical Invariants
//!
//! 1. `HALF_DAY_MS * 2 == MS_PER_DAY`
//! 2. `MS_PER_HOUR * 24 == MS_PER_DAY`
//! 3. `MIN_YEAR <= MAX_YEAR`

// ============================================================================
// JULIAN DATE ARITHMETIC
// ============================================================================

/// Milliseconds in one Julian day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Offset between the Julian noon anchor and civil midnight.
pub const HALF_DAY_MS: i64 = MS_PER_DAY / 2;

pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_SECOND: i64 = 1_000;

/// Julian day number of the Gregorian calendar switch used by `computeYMD`.
pub const GREGORIAN_SHIFT_JD: f64 = 1_867_216.25;

/// Days per Gregorian century, as used by the civil-from-Julian derivation.
pub const DAYS_PER_CENTURY: f64 = 36_524.25;

/// Julian Date of 1970-01-01 00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const _: () = assert!(HALF_DAY_MS * 2 == MS_PER_DAY);
const _: () = assert!(MS_PER_HOUR * 24 == MS_PER_DAY);
const _: () = assert!(MS_PER_MINUTE * 60 == MS_PER_HOUR);
const _: () = assert!(MS_PER_SECOND * 60 == MS_PER_MINUTE);

// ============================================================================
// CALENDAR RANGE
// ============================================================================

/// Smallest year a decoded date-time may carry.
pub const MIN_YEAR: i32 = 1;

/// Largest year a decoded date-time may carry.
pub const MAX_YEAR: i32 = 9999;

const _: () = assert!(MIN_YEAR <= MAX_YEAR);

// ============================================================================
// TEXT GRAMMARS
// ============================================================================

/// Byte length of a blob that is reinterpreted directly as a GUID.
pub const GUID_BYTE_LEN: usize = 16;

/// Maximum fractional-second digits accepted by the duration grammar
/// (100ns ticks).
pub const MAX_SPAN_FRACTION_DIGITS: usize = 7;

/// Maximum fractional-second digits accepted by the date-time grammar.
pub const MAX_DATETIME_FRACTION_DIGITS: usize = 9;

/// Significant digits used when a float cell is read as text.
pub const FLOAT_TEXT_DIGITS: usize = 15;

// ============================================================================
// SQLITE FUNDAMENTAL TYPE CODES
// ============================================================================

pub const SQLITE_INTEGER: i32 = 1;
pub const SQLITE_FLOAT: i32 = 2;
pub const SQLITE_TEXT: i32 = 3;
pub const SQLITE_BLOB: i32 = 4;
pub const SQLITE_NULL: i32 = 5;
