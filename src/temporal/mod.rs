//! # Temporal Conversions
//!
//! Numeric date-time cells are Julian Dates. This module owns the pure
//! conversion between Julian Dates and calendar date-times; text date-times
//! are handled by the grammars in `parsing`.
//!
//! - `julian`: fixed-point Julian Date <-> calendar conversion

pub mod julian;

pub use julian::{datetime_to_julian, julian_to_datetime, to_calendar, CalendarDateTime};
