//! # Null Policy
//!
//! The single place that decides what a null cell reads as. There are two
//! entry points, and the requested type picks one:
//!
//! - [`null_marker`]: the explicit "no value" marker, used for `Option<T>`,
//!   `DbNull` and `Value`
//! - [`type_default`] / [`NullDefault`]: the zero value of the requested
//!   type, used for everything else
//!
//! | Kind | Default |
//! |------|---------|
//! | integers, floats | 0 |
//! | bool | false |
//! | char | `'\0'` |
//! | string, bytes | empty |
//! | decimal | 0 |
//! | GUID | nil |
//! | time span | zero |
//! | date-time | 0001-01-01 00:00:00 |
//! | date-time with offset | 0001-01-01 00:00:00 +00:00 |

use crate::types::{Scalar, ScalarKind, Value};
use rust_decimal::Decimal;
use time::macros::datetime;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

/// Zero value of a type when its cell is null.
pub trait NullDefault {
    fn null_default() -> Self;
}

macro_rules! null_default_via_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NullDefault for $ty {
                fn null_default() -> Self {
                    <$ty>::default()
                }
            }
        )*
    };
}

null_default_via_default!(bool, u8, i8, i16, u16, i32, u32, i64, u64, f32, f64, char, String, Vec<u8>, Decimal);

impl NullDefault for Uuid {
    fn null_default() -> Self {
        Uuid::nil()
    }
}

impl NullDefault for Duration {
    fn null_default() -> Self {
        Duration::ZERO
    }
}

impl NullDefault for PrimitiveDateTime {
    fn null_default() -> Self {
        datetime!(0001-01-01 0:00)
    }
}

impl NullDefault for OffsetDateTime {
    fn null_default() -> Self {
        datetime!(0001-01-01 0:00 UTC)
    }
}

pub fn null_marker() -> Scalar {
    Scalar::Null
}

pub fn type_default(kind: ScalarKind) -> Scalar {
    match kind {
        ScalarKind::Bool => Scalar::Bool(NullDefault::null_default()),
        ScalarKind::Byte => Scalar::Byte(NullDefault::null_default()),
        ScalarKind::Bytes => Scalar::Bytes(NullDefault::null_default()),
        ScalarKind::Char => Scalar::Char(NullDefault::null_default()),
        ScalarKind::DateTime => Scalar::DateTime(NullDefault::null_default()),
        ScalarKind::DateTimeOffset => Scalar::DateTimeOffset(NullDefault::null_default()),
        ScalarKind::Decimal => Scalar::Decimal(NullDefault::null_default()),
        ScalarKind::Double => Scalar::Double(NullDefault::null_default()),
        ScalarKind::Float => Scalar::Float(NullDefault::null_default()),
        ScalarKind::Guid => Scalar::Guid(NullDefault::null_default()),
        ScalarKind::Int32 => Scalar::Int32(NullDefault::null_default()),
        ScalarKind::Int64 => Scalar::Int64(NullDefault::null_default()),
        ScalarKind::SByte => Scalar::SByte(NullDefault::null_default()),
        ScalarKind::Int16 => Scalar::Int16(NullDefault::null_default()),
        ScalarKind::String => Scalar::String(NullDefault::null_default()),
        ScalarKind::TimeSpan => Scalar::TimeSpan(NullDefault::null_default()),
        ScalarKind::UInt32 => Scalar::UInt32(NullDefault::null_default()),
        ScalarKind::UInt64 => Scalar::UInt64(NullDefault::null_default()),
        ScalarKind::UInt16 => Scalar::UInt16(NullDefault::null_default()),
        ScalarKind::NullMarker => null_marker(),
        ScalarKind::Value => Scalar::Value(Value::Null),
    }
}
