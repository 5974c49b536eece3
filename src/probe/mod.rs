//! # Storage Probe
//!
//! The contract a row or cursor source implements so a `RowReader` can
//! decode it. The probe exposes the row it is currently positioned on; the
//! reader never caches anything it reads.
//!
//! ## Contract
//!
//! | Method | Returns |
//! |--------|---------|
//! | `field_count` | number of cells in the row |
//! | `storage_code` | SQLite fundamental type code of a cell |
//! | `read_integer` | cell as i64 |
//! | `read_float` | cell as f64 |
//! | `read_text` | cell as text |
//! | `read_bytes` | cell as bytes, `None` when the cell holds no payload |
//!
//! Readers check `storage_code` before calling a raw accessor wherever the
//! behavior depends on the class. Raw accessors called on a cell of another
//! class follow SQLite's coercions (see [`CellRef`]).
//!
//! ## Provided Implementations
//!
//! - [`Row`]: an owned in-memory row of `Value`s
//! - `rusqlite::Row`: a live SQLite cursor row

mod cell;
mod row;
mod sqlite;

pub use cell::CellRef;
pub use row::Row;

use eyre::Result;
use std::borrow::Cow;

pub trait StorageProbe {
    fn field_count(&self) -> usize;

    fn storage_code(&self, ordinal: usize) -> Result<i32>;

    fn read_integer(&self, ordinal: usize) -> Result<i64>;

    fn read_float(&self, ordinal: usize) -> Result<f64>;

    fn read_text(&self, ordinal: usize) -> Result<Cow<'_, str>>;

    fn read_bytes(&self, ordinal: usize) -> Result<Option<Cow<'_, [u8]>>>;
}

impl<P: StorageProbe + ?Sized> StorageProbe for &P {
    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn storage_code(&self, ordinal: usize) -> Result<i32> {
        (**self).storage_code(ordinal)
    }

    fn read_integer(&self, ordinal: usize) -> Result<i64> {
        (**self).read_integer(ordinal)
    }

    fn read_float(&self, ordinal: usize) -> Result<f64> {
        (**self).read_float(ordinal)
    }

    fn read_text(&self, ordinal: usize) -> Result<Cow<'_, str>> {
        (**self).read_text(ordinal)
    }

    fn read_bytes(&self, ordinal: usize) -> Result<Option<Cow<'_, [u8]>>> {
        (**self).read_bytes(ordinal)
    }
}
