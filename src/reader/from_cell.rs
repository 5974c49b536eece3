//! # Requested Types
//!
//! `FromCell` is implemented by every type `RowReader::get` can produce. The
//! implementation supplies the `ScalarKind` the dispatcher routes on, whether
//! the type has a null representation of its own, and how to take its value
//! out of the tagged `Scalar` the dispatcher returns.
//!
//! Wrapper types are unwrapped through the trait itself:
//!
//! - `Option<T>` reports `T`'s kind and is nullable
//! - enumerations over an integer report the integer's kind (`cell_enum!`)
//! - other types go through the generic value accessor (`cell_value!`)

use crate::error::cast_failure;
use crate::types::{DbNull, Scalar, ScalarKind, Value};
use eyre::{Report, Result};
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

pub trait FromCell: Sized {
    /// Scalar kind the dispatcher reads for this type.
    const KIND: ScalarKind;

    /// Whether a null cell maps to the null marker instead of `KIND`'s default.
    const NULLABLE: bool = false;

    fn from_scalar(scalar: Scalar) -> Result<Self>;
}

pub(crate) fn mismatch(kind: ScalarKind, got: &Scalar) -> Report {
    cast_failure(format!("cannot assign {} to {}", got.kind(), kind))
}

macro_rules! scalar_from_cell {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromCell for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn from_scalar(scalar: Scalar) -> Result<Self> {
                    match scalar {
                        Scalar::$variant(v) => Ok(v),
                        other => Err(mismatch(Self::KIND, &other)),
                    }
                }
            }
        )*
    };
}

scalar_from_cell! {
    bool => Bool,
    u8 => Byte,
    Vec<u8> => Bytes,
    char => Char,
    PrimitiveDateTime => DateTime,
    OffsetDateTime => DateTimeOffset,
    Decimal => Decimal,
    f64 => Double,
    f32 => Float,
    Uuid => Guid,
    i32 => Int32,
    i64 => Int64,
    i8 => SByte,
    i16 => Int16,
    String => String,
    Duration => TimeSpan,
    u32 => UInt32,
    u64 => UInt64,
    u16 => UInt16,
}

impl<T: FromCell> FromCell for Option<T> {
    const KIND: ScalarKind = T::KIND;
    const NULLABLE: bool = true;

    fn from_scalar(scalar: Scalar) -> Result<Self> {
        match scalar {
            Scalar::Null => Ok(None),
            other => T::from_scalar(other).map(Some),
        }
    }
}

impl FromCell for DbNull {
    const KIND: ScalarKind = ScalarKind::NullMarker;
    const NULLABLE: bool = true;

    fn from_scalar(scalar: Scalar) -> Result<Self> {
        match scalar {
            Scalar::Null | Scalar::Value(Value::Null) => Ok(DbNull),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl FromCell for Value {
    const KIND: ScalarKind = ScalarKind::Value;
    const NULLABLE: bool = true;

    fn from_scalar(scalar: Scalar) -> Result<Self> {
        match scalar {
            Scalar::Null => Ok(Value::Null),
            Scalar::Value(v) => Ok(v),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;

    #[test]
    fn test_option_unwraps_kind() {
        assert_eq!(<Option<i32> as FromCell>::KIND, ScalarKind::Int32);
        assert!(<Option<i32> as FromCell>::NULLABLE);
        assert!(!<i32 as FromCell>::NULLABLE);
        assert!(!<String as FromCell>::NULLABLE);
    }

    #[test]
    fn test_option_from_null() {
        assert_eq!(Option::<i64>::from_scalar(Scalar::Null).unwrap(), None);
        assert_eq!(
            Option::<i64>::from_scalar(Scalar::Int64(4)).unwrap(),
            Some(4)
        );
    }

    #[test]
    fn test_mismatch_is_cast_failure() {
        let err = i32::from_scalar(Scalar::String("x".into())).unwrap_err();
        assert_eq!(DecodeErrorKind::of(&err), Some(DecodeErrorKind::Cast));
        let err = DbNull::from_scalar(Scalar::Int64(1)).unwrap_err();
        assert_eq!(DecodeErrorKind::of(&err), Some(DecodeErrorKind::Cast));
    }
}
