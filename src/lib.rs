//! # rowcast - Typed Cell Reads over SQLite Rows
//!
//! rowcast turns the dynamically-typed cells of a SQLite result row into
//! statically-typed values. A row source only has to report each cell's
//! storage class and hand out its raw integer, float, text or byte payload;
//! the reader decides how that payload becomes the type the caller asked for.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rowcast::{Row, RowReader, Value};
//!
//! let row = Row::new(vec![Value::Int(42), Value::Float(2451545.0), Value::Null]);
//! let reader = RowReader::new(&row);
//!
//! let id: i32 = reader.get(0)?;
//! let at: time::PrimitiveDateTime = reader.get(1)?;   // 2000-01-01 12:00:00
//! let note: Option<String> = reader.get(2)?;          // None
//! let zero: i64 = reader.get(2)?;                     // 0
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   RowReader::get::<T> / get_kind     │
//! ├─────────────────────────────────────┤
//! │  Type Coercion Dispatcher (FromCell) │
//! ├──────────────┬──────────────────────┤
//! │  Null Policy │  Per-type Accessors   │
//! ├──────────────┴───────┬──────────────┤
//! │  Julian Date (temporal)│ Text grammars│
//! ├──────────────────────┴──────────────┤
//! │   StorageProbe (Row, rusqlite::Row)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`]: constants and `ReaderConfig`
//! - [`error`]: decode failure taxonomy carried in `eyre::Report`
//! - [`types`]: storage classes, `Value`, `ScalarKind` and `Scalar`
//! - [`probe`]: the `StorageProbe` contract and its adapters
//! - [`reader`]: `RowReader`, `FromCell` and the null policy
//! - [`temporal`]: Julian Date conversion
//! - [`parsing`]: date-time, decimal, time-span and GUID grammars

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod parsing;
pub mod probe;
pub mod reader;
pub mod temporal;
pub mod types;

pub use config::{GuidByteOrder, Narrowing, ReaderConfig};
pub use error::{DecodeError, DecodeErrorKind};
pub use probe::{CellRef, Row, StorageProbe};
pub use reader::{FromCell, RowReader};
pub use temporal::{datetime_to_julian, julian_to_datetime, CalendarDateTime};
pub use types::{DbNull, Scalar, ScalarKind, StorageClass, Value};
