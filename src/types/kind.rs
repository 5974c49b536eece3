//! # Scalar Kinds
//!
//! `ScalarKind` names every requested type the dispatcher knows how to
//! produce; `Scalar` is the matching tagged result. Dispatch is keyed on the
//! kind rather than on runtime type inspection.
//!
//! | Kind | Rust type | Read through |
//! |------|-----------|--------------|
//! | Bool | bool | integer |
//! | Byte, SByte, Int16, UInt16, Int32, UInt32, Int64, UInt64 | u8 ... u64 | integer |
//! | Char | char | integer |
//! | Double, Float | f64, f32 | float |
//! | String | String | text |
//! | Bytes | Vec<u8> | bytes |
//! | DateTime | time::PrimitiveDateTime | Julian Date or text |
//! | DateTimeOffset | time::OffsetDateTime | Julian Date or text |
//! | Decimal | rust_decimal::Decimal | text |
//! | TimeSpan | time::Duration | text |
//! | Guid | uuid::Uuid | bytes or text |
//! | NullMarker | DbNull | - |
//! | Value | Value | generic value accessor |

use super::Value;
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Byte,
    Bytes,
    Char,
    DateTime,
    DateTimeOffset,
    Decimal,
    Double,
    Float,
    Guid,
    Int32,
    Int64,
    SByte,
    Int16,
    String,
    TimeSpan,
    UInt32,
    UInt64,
    UInt16,
    NullMarker,
    /// Anything outside the supported set; served by the generic accessor.
    Value,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Byte => "u8",
            ScalarKind::Bytes => "bytes",
            ScalarKind::Char => "char",
            ScalarKind::DateTime => "datetime",
            ScalarKind::DateTimeOffset => "datetime with offset",
            ScalarKind::Decimal => "decimal",
            ScalarKind::Double => "f64",
            ScalarKind::Float => "f32",
            ScalarKind::Guid => "guid",
            ScalarKind::Int32 => "i32",
            ScalarKind::Int64 => "i64",
            ScalarKind::SByte => "i8",
            ScalarKind::Int16 => "i16",
            ScalarKind::String => "string",
            ScalarKind::TimeSpan => "time span",
            ScalarKind::UInt32 => "u32",
            ScalarKind::UInt64 => "u64",
            ScalarKind::UInt16 => "u16",
            ScalarKind::NullMarker => "null marker",
            ScalarKind::Value => "value",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tagged result of a kind-keyed read.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Byte(u8),
    Bytes(Vec<u8>),
    Char(char),
    DateTime(PrimitiveDateTime),
    DateTimeOffset(OffsetDateTime),
    Decimal(Decimal),
    Double(f64),
    Float(f32),
    Guid(Uuid),
    Int32(i32),
    Int64(i64),
    SByte(i8),
    Int16(i16),
    String(String),
    TimeSpan(Duration),
    UInt32(u32),
    UInt64(u64),
    UInt16(u16),
    Value(Value),
}

impl Scalar {
    /// The kind this scalar was produced for. `Null` reports the marker kind.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Null => ScalarKind::NullMarker,
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Byte(_) => ScalarKind::Byte,
            Scalar::Bytes(_) => ScalarKind::Bytes,
            Scalar::Char(_) => ScalarKind::Char,
            Scalar::DateTime(_) => ScalarKind::DateTime,
            Scalar::DateTimeOffset(_) => ScalarKind::DateTimeOffset,
            Scalar::Decimal(_) => ScalarKind::Decimal,
            Scalar::Double(_) => ScalarKind::Double,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Guid(_) => ScalarKind::Guid,
            Scalar::Int32(_) => ScalarKind::Int32,
            Scalar::Int64(_) => ScalarKind::Int64,
            Scalar::SByte(_) => ScalarKind::SByte,
            Scalar::Int16(_) => ScalarKind::Int16,
            Scalar::String(_) => ScalarKind::String,
            Scalar::TimeSpan(_) => ScalarKind::TimeSpan,
            Scalar::UInt32(_) => ScalarKind::UInt32,
            Scalar::UInt64(_) => ScalarKind::UInt64,
            Scalar::UInt16(_) => ScalarKind::UInt16,
            Scalar::Value(_) => ScalarKind::Value,
        }
    }
}
