//! # rowcast Configuration Module
//!
//! Centralizes the constants shared across the crate and the small runtime
//! configuration a `RowReader` carries.
//!
//! ## Module Organization
//!
//! - [`constants`]: Julian Date arithmetic, calendar bounds, grammar limits
//! - [`ReaderConfig`]: per-reader knobs, the narrowing mode and GUID byte order
//!
//! ## Usage
//!
//! ```ignore
//! use rowcast::config::{Narrowing, ReaderConfig};
//!
//! let config = ReaderConfig::default().with_narrowing(Narrowing::Checked);
//! let reader = RowReader::with_config(&row, config);
//! ```

pub mod constants;
pub use constants::*;

/// How an integer cell is narrowed into a smaller integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Narrowing {
    /// Plain `as` cast: high bits are dropped, no error is raised.
    #[default]
    Truncate,
    /// Values outside the target range raise a range failure.
    Checked,
}

/// Byte layout of a 16-byte GUID blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuidByteOrder {
    /// RFC 4122 order, every field big-endian.
    #[default]
    Rfc4122,
    /// First three fields little-endian, as .NET `Guid.ToByteArray()` writes.
    MixedEndian,
}

/// Runtime configuration for a `RowReader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReaderConfig {
    narrowing: Narrowing,
    guid_byte_order: GuidByteOrder,
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    pub fn with_guid_byte_order(mut self, order: GuidByteOrder) -> Self {
        self.guid_byte_order = order;
        self
    }

    pub fn narrowing(&self) -> Narrowing {
        self.narrowing
    }

    pub fn guid_byte_order(&self) -> GuidByteOrder {
        self.guid_byte_order
    }
}
