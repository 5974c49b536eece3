//! # Text Grammars
//!
//! Fixed, culture-invariant grammars applied when a typed value is read from
//! a text cell. None of them is configurable.
//!
//! ## Module Structure
//!
//! - `datetime`: date-time with optional offset
//! - `literal`: decimal (with exponent), GUID, time span
//!
//! ```ignore
//! use rowcast::parsing::{parse_decimal, parse_datetime};
//!
//! let d = parse_decimal("1.5E10")?;
//! let t = parse_datetime("2024-01-15 13:45:30")?;
//! ```

pub mod datetime;
pub mod literal;

pub use datetime::{parse_datetime, parse_datetime_offset, parse_datetime_text, ParsedDateTime};
pub use literal::{parse_decimal, parse_guid, parse_time_span};
