//! Per-type accessors behind `RowReader::get_kind`.
//!
//! The dispatcher reads the storage class once and hands it in; null cells
//! never reach these functions, they are resolved by the null policy first.
//! Each accessor reads the raw value the rule for its type calls for.

use super::RowReader;
use crate::config::{GuidByteOrder, Narrowing, GUID_BYTE_LEN};
use crate::error::{format_failure, range_failure};
use crate::parsing::{parse_datetime, parse_datetime_offset, parse_decimal, parse_guid, parse_time_span};
use crate::probe::StorageProbe;
use crate::temporal::julian_to_datetime;
use crate::types::StorageClass;
use eyre::Result;
use rust_decimal::Decimal;
use std::borrow::Cow;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

macro_rules! narrow_accessor {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $name(&self, ordinal: usize) -> Result<$ty> {
                let v = self.probe.read_integer(ordinal)?;
                match self.config.narrowing() {
                    Narrowing::Truncate => Ok(v as $ty),
                    Narrowing::Checked => <$ty>::try_from(v).map_err(|_| {
                        range_failure(format!(
                            "integer {} at ordinal {} does not fit in {}",
                            v,
                            ordinal,
                            stringify!($ty)
                        ))
                    }),
                }
            }
        )*
    };
}

impl<P: StorageProbe + ?Sized> RowReader<'_, P> {
    /// Text of a text or blob cell, decoded as UTF-8.
    fn text_of(&self, ordinal: usize, class: StorageClass) -> Result<Cow<'_, str>> {
        if class != StorageClass::Blob {
            return self.probe.read_text(ordinal);
        }
        let text = match self.probe.read_bytes(ordinal)?.unwrap_or_default() {
            Cow::Borrowed(b) => std::str::from_utf8(b).map(Cow::Borrowed),
            Cow::Owned(b) => String::from_utf8(b)
                .map(Cow::Owned)
                .map_err(|e| e.utf8_error()),
        };
        text.map_err(|e| {
            format_failure(format!("blob at ordinal {} is not UTF-8 text: {}", ordinal, e))
        })
    }

    pub(crate) fn get_bool(&self, ordinal: usize) -> Result<bool> {
        Ok(self.probe.read_integer(ordinal)? != 0)
    }

    narrow_accessor! {
        get_u8 => u8,
        get_i8 => i8,
        get_i16 => i16,
        get_u16 => u16,
        get_i32 => i32,
        get_u32 => u32,
        get_u64 => u64,
    }

    pub(crate) fn get_i64(&self, ordinal: usize) -> Result<i64> {
        self.probe.read_integer(ordinal)
    }

    /// Reads an integer cell as a Unicode scalar value.
    ///
    /// `char` is a full code point, not a UTF-16 unit: truncation keeps the
    /// low 32 bits, so values above U+FFFF survive instead of wrapping at 16
    /// bits. Surrogates and codes past U+10FFFF read as U+FFFD, or fail with
    /// a range failure under `Narrowing::Checked`.
    pub(crate) fn get_char(&self, ordinal: usize) -> Result<char> {
        let v = self.probe.read_integer(ordinal)?;
        let code = match self.config.narrowing() {
            Narrowing::Truncate => v as u32,
            Narrowing::Checked => u32::try_from(v).map_err(|_| {
                range_failure(format!("integer {} at ordinal {} is not a character code", v, ordinal))
            })?,
        };
        match char::from_u32(code) {
            Some(c) => Ok(c),
            None if self.config.narrowing() == Narrowing::Checked => Err(range_failure(format!(
                "code point {:#x} at ordinal {} is not a scalar value",
                code, ordinal
            ))),
            None => Ok(char::REPLACEMENT_CHARACTER),
        }
    }

    pub(crate) fn get_f64(&self, ordinal: usize) -> Result<f64> {
        self.probe.read_float(ordinal)
    }

    pub(crate) fn get_f32(&self, ordinal: usize) -> Result<f32> {
        Ok(self.get_f64(ordinal)? as f32)
    }

    pub(crate) fn get_string(&self, ordinal: usize) -> Result<String> {
        Ok(self.probe.read_text(ordinal)?.into_owned())
    }

    pub(crate) fn get_bytes(&self, ordinal: usize) -> Result<Vec<u8>> {
        Ok(self
            .probe
            .read_bytes(ordinal)?
            .map(Cow::into_owned)
            .unwrap_or_default())
    }

    pub(crate) fn get_datetime(&self, ordinal: usize, class: StorageClass) -> Result<PrimitiveDateTime> {
        match class {
            StorageClass::Integer | StorageClass::Float => {
                julian_to_datetime(self.probe.read_float(ordinal)?)
            }
            _ => parse_datetime(&self.text_of(ordinal, class)?),
        }
    }

    pub(crate) fn get_datetime_offset(
        &self,
        ordinal: usize,
        class: StorageClass,
    ) -> Result<OffsetDateTime> {
        match class {
            StorageClass::Integer | StorageClass::Float => {
                Ok(julian_to_datetime(self.probe.read_float(ordinal)?)?.assume_utc())
            }
            _ => parse_datetime_offset(&self.text_of(ordinal, class)?),
        }
    }

    pub(crate) fn get_decimal(&self, ordinal: usize, class: StorageClass) -> Result<Decimal> {
        match class {
            StorageClass::Integer => Ok(Decimal::from(self.probe.read_integer(ordinal)?)),
            _ => parse_decimal(&self.text_of(ordinal, class)?),
        }
    }

    pub(crate) fn get_time_span(&self, ordinal: usize, class: StorageClass) -> Result<Duration> {
        parse_time_span(&self.text_of(ordinal, class)?)
    }

    /// Reads a GUID cell.
    ///
    /// A 16-byte blob is taken as the raw identifier in the configured
    /// [`GuidByteOrder`]. The default is RFC 4122 big-endian order; blobs
    /// written from a .NET `Guid.ToByteArray()` store the first three fields
    /// little-endian and need `GuidByteOrder::MixedEndian`, or they decode
    /// with those fields byte-swapped. Other blobs are read as UTF-8 GUID
    /// text, and every other class is parsed from its text.
    pub(crate) fn get_guid(&self, ordinal: usize, class: StorageClass) -> Result<Uuid> {
        if class != StorageClass::Blob {
            return parse_guid(&self.probe.read_text(ordinal)?);
        }
        let bytes = self.probe.read_bytes(ordinal)?.unwrap_or_default();
        if let Ok(raw) = <[u8; GUID_BYTE_LEN]>::try_from(bytes.as_ref()) {
            return Ok(match self.config.guid_byte_order() {
                GuidByteOrder::Rfc4122 => Uuid::from_bytes(raw),
                GuidByteOrder::MixedEndian => Uuid::from_bytes_le(raw),
            });
        }
        let text = std::str::from_utf8(&bytes).map_err(|e| {
            format_failure(format!("blob at ordinal {} is not UTF-8 text: {}", ordinal, e))
        })?;
        parse_guid(text)
    }
}
