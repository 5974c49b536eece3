//! # Row Reader
//!
//! `RowReader` is the typed surface over a `StorageProbe`. It owns no row
//! data: every call reads the cell's storage class and payload through the
//! probe, decides how to interpret them for the requested type, and returns
//! an owned value.
//!
//! ## Dispatch
//!
//! ```text
//! get::<T>(ordinal)
//!    │
//!    ├─ class == Null && T::NULLABLE ──> null policy: marker
//!    ├─ class == Null ──> null policy: type default
//!    │
//!    └─ match T::KIND ──> per-type accessor(class) ──> T::from_scalar
//!                          │
//!                          ├─ numeric date-time ──> Julian Date converter
//!                          └─ text ──> fixed grammar (date-time, decimal, span, GUID)
//! ```
//!
//! ## Upstream Surface
//!
//! | Method | Purpose |
//! |--------|---------|
//! | `is_null` | whether the cell is null |
//! | `get::<T>` | typed read for any `FromCell` type |
//! | `get_kind` | typed read keyed on a runtime `ScalarKind` |
//! | `get_value` | natural representation of the cell |
//! | `get_values` | natural representation of every cell |
//!
//! The reader is `Copy` and stateless; concurrent use is as safe as the
//! underlying probe.

mod accessors;
mod from_cell;
pub mod null_policy;

pub use from_cell::FromCell;

use crate::config::ReaderConfig;
use crate::error::{cast_failure, invariant_violation};
use crate::probe::StorageProbe;
use crate::types::{Scalar, ScalarKind, StorageClass, Value};
use eyre::{ensure, Result};

pub struct RowReader<'p, P: StorageProbe + ?Sized> {
    probe: &'p P,
    config: ReaderConfig,
}

impl<P: StorageProbe + ?Sized> Clone for RowReader<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: StorageProbe + ?Sized> Copy for RowReader<'_, P> {}

impl<P: StorageProbe + ?Sized> std::fmt::Debug for RowReader<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowReader")
            .field("field_count", &self.probe.field_count())
            .field("config", &self.config)
            .finish()
    }
}

impl<'p, P: StorageProbe + ?Sized> RowReader<'p, P> {
    pub fn new(probe: &'p P) -> Self {
        Self::with_config(probe, ReaderConfig::default())
    }

    pub fn with_config(probe: &'p P, config: ReaderConfig) -> Self {
        Self { probe, config }
    }

    pub fn probe(&self) -> &'p P {
        self.probe
    }

    pub fn config(&self) -> ReaderConfig {
        self.config
    }

    pub fn field_count(&self) -> usize {
        self.probe.field_count()
    }

    /// Storage class of the cell at `ordinal`.
    ///
    /// Fails for an ordinal outside the row, and with an invariant violation
    /// when the probe reports a type code this crate does not know.
    pub fn storage_class(&self, ordinal: usize) -> Result<StorageClass> {
        let count = self.field_count();
        ensure!(
            ordinal < count,
            "ordinal {} out of range for row with {} fields",
            ordinal,
            count
        );
        let code = self.probe.storage_code(ordinal)?;
        StorageClass::from_code(code).ok_or_else(|| {
            invariant_violation(format!(
                "probe reported unknown storage class code {} at ordinal {}",
                code, ordinal
            ))
        })
    }

    pub fn is_null(&self, ordinal: usize) -> Result<bool> {
        Ok(self.storage_class(ordinal)?.is_null())
    }

    /// Kind the generic value accessor would produce for the cell.
    pub fn field_kind(&self, ordinal: usize) -> Result<ScalarKind> {
        Ok(self.storage_class(ordinal)?.natural_kind())
    }

    /// Reads the cell at `ordinal` as `T`.
    pub fn get<T: FromCell>(&self, ordinal: usize) -> Result<T> {
        let scalar = self.get_kind(ordinal, T::KIND, T::NULLABLE)?;
        T::from_scalar(scalar)
    }

    /// Reads the cell at `ordinal` as `kind`.
    ///
    /// With `nullable` set, a null cell yields `Scalar::Null`; otherwise it
    /// yields the kind's default.
    pub fn get_kind(&self, ordinal: usize, kind: ScalarKind, nullable: bool) -> Result<Scalar> {
        let class = self.storage_class(ordinal)?;
        if class.is_null() {
            if nullable {
                tracing::trace!(ordinal, %kind, "null cell read as null marker");
                return Ok(null_policy::null_marker());
            }
            tracing::trace!(ordinal, %kind, "null cell read as type default");
            return Ok(null_policy::type_default(kind));
        }
        tracing::trace!(ordinal, %kind, ?class, "dispatching cell read");

        match kind {
            ScalarKind::Bool => self.get_bool(ordinal).map(Scalar::Bool),
            ScalarKind::Byte => self.get_u8(ordinal).map(Scalar::Byte),
            ScalarKind::Bytes => self.get_bytes(ordinal).map(Scalar::Bytes),
            ScalarKind::Char => self.get_char(ordinal).map(Scalar::Char),
            ScalarKind::DateTime => self.get_datetime(ordinal, class).map(Scalar::DateTime),
            ScalarKind::DateTimeOffset => self
                .get_datetime_offset(ordinal, class)
                .map(Scalar::DateTimeOffset),
            ScalarKind::Decimal => self.get_decimal(ordinal, class).map(Scalar::Decimal),
            ScalarKind::Double => self.get_f64(ordinal).map(Scalar::Double),
            ScalarKind::Float => self.get_f32(ordinal).map(Scalar::Float),
            ScalarKind::Guid => self.get_guid(ordinal, class).map(Scalar::Guid),
            ScalarKind::Int32 => self.get_i32(ordinal).map(Scalar::Int32),
            ScalarKind::Int64 => self.get_i64(ordinal).map(Scalar::Int64),
            ScalarKind::SByte => self.get_i8(ordinal).map(Scalar::SByte),
            ScalarKind::Int16 => self.get_i16(ordinal).map(Scalar::Int16),
            ScalarKind::String => self.get_string(ordinal).map(Scalar::String),
            ScalarKind::TimeSpan => self.get_time_span(ordinal, class).map(Scalar::TimeSpan),
            ScalarKind::UInt32 => self.get_u32(ordinal).map(Scalar::UInt32),
            ScalarKind::UInt64 => self.get_u64(ordinal).map(Scalar::UInt64),
            ScalarKind::UInt16 => self.get_u16(ordinal).map(Scalar::UInt16),
            ScalarKind::NullMarker => Err(cast_failure(format!(
                "null marker requested for non-null {:?} cell at ordinal {}",
                class, ordinal
            ))),
            ScalarKind::Value => self.value_of(ordinal, class).map(Scalar::Value),
        }
    }

    /// Natural representation of the cell at `ordinal`.
    pub fn get_value(&self, ordinal: usize) -> Result<Value> {
        let class = self.storage_class(ordinal)?;
        self.value_of(ordinal, class)
    }

    fn value_of(&self, ordinal: usize, class: StorageClass) -> Result<Value> {
        Ok(match class {
            StorageClass::Integer => Value::Int(self.probe.read_integer(ordinal)?),
            StorageClass::Float => Value::Float(self.probe.read_float(ordinal)?),
            StorageClass::Text => Value::Text(self.probe.read_text(ordinal)?.into_owned()),
            StorageClass::Blob => Value::Blob(
                self.probe
                    .read_bytes(ordinal)?
                    .map(|b| b.into_owned())
                    .unwrap_or_default(),
            ),
            StorageClass::Null => Value::Null,
        })
    }

    /// Copies every cell's natural value into `buf`, returning the count.
    ///
    /// `buf` must hold at least `field_count()` values; extra slots are left
    /// untouched.
    pub fn get_values(&self, buf: &mut [Value]) -> Result<usize> {
        let count = self.field_count();
        ensure!(
            buf.len() >= count,
            "buffer of {} values cannot hold row with {} fields",
            buf.len(),
            count
        );
        for (ordinal, slot) in buf.iter_mut().take(count).enumerate() {
            *slot = self.get_value(ordinal)?;
        }
        Ok(count)
    }
}
