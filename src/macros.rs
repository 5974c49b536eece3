//! # Requested-Type Macros
//!
//! Implements `FromCell` for caller types without writing the trait by hand.
//!
//! ## cell_enum!
//!
//! Reads an enumeration through its integer base type. The integer is read
//! with the base type's rules (including silent narrowing) and converted with
//! `TryFrom`; a rejected value is a cast failure.
//!
//! ```ignore
//! #[derive(Debug, PartialEq)]
//! enum Status { Active = 1, Disabled = 2 }
//!
//! impl TryFrom<i32> for Status {
//!     type Error = ();
//!     fn try_from(v: i32) -> Result<Self, ()> {
//!         match v { 1 => Ok(Status::Active), 2 => Ok(Status::Disabled), _ => Err(()) }
//!     }
//! }
//!
//! rowcast::cell_enum!(Status: i32);
//!
//! let status: Option<Status> = reader.get(3)?;
//! ```
//!
//! ## cell_value!
//!
//! Reads a type outside the supported scalar set through the generic value
//! accessor and `TryFrom<Value>`; a rejected value is a cast failure.
//!
//! ```ignore
//! struct Tag(String);
//!
//! impl TryFrom<rowcast::Value> for Tag { ... }
//!
//! rowcast::cell_value!(Tag);
//! ```

/// Implements `FromCell` for an enumeration over an integer base type.
#[macro_export]
macro_rules! cell_enum {
    ($ty:ty : $repr:ty) => {
        impl $crate::FromCell for $ty {
            const KIND: $crate::ScalarKind = <$repr as $crate::FromCell>::KIND;

            fn from_scalar(scalar: $crate::Scalar) -> $crate::error::Result<Self> {
                let repr = <$repr as $crate::FromCell>::from_scalar(scalar)?;
                <$ty as ::core::convert::TryFrom<$repr>>::try_from(repr).map_err(|_| {
                    $crate::error::cast_failure(format!(
                        "{} is not a valid {}",
                        repr,
                        stringify!($ty)
                    ))
                })
            }
        }
    };
}

/// Implements `FromCell` for a type assignable from the generic `Value`.
#[macro_export]
macro_rules! cell_value {
    ($ty:ty) => {
        impl $crate::FromCell for $ty {
            const KIND: $crate::ScalarKind = $crate::ScalarKind::Value;

            fn from_scalar(scalar: $crate::Scalar) -> $crate::error::Result<Self> {
                let value = match scalar {
                    $crate::Scalar::Value(v) => v,
                    $crate::Scalar::Null => $crate::Value::Null,
                    other => {
                        return Err($crate::error::cast_failure(format!(
                            "cannot assign {} to {}",
                            other.kind(),
                            stringify!($ty)
                        )))
                    }
                };
                let shown = value.display_string();
                <$ty as ::core::convert::TryFrom<$crate::Value>>::try_from(value).map_err(|_| {
                    $crate::error::cast_failure(format!(
                        "value '{}' is not assignable to {}",
                        shown,
                        stringify!($ty)
                    ))
                })
            }
        }
    };
}
