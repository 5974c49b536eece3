//! # Storage Classes
//!
//! The dynamic type tag a cell carries. Probes report the raw SQLite
//! fundamental type code; [`StorageClass::from_code`] maps it and returns
//! `None` for codes this crate does not know.
//!
//! | Class | Code | Payload |
//! |-------|------|---------|
//! | Integer | 1 | i64 |
//! | Float | 2 | f64 |
//! | Text | 3 | UTF-8 string |
//! | Blob | 4 | bytes |
//! | Null | 5 | - |

use crate::config::{SQLITE_BLOB, SQLITE_FLOAT, SQLITE_INTEGER, SQLITE_NULL, SQLITE_TEXT};
use crate::types::ScalarKind;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    Integer = 1,
    Float = 2,
    Text = 3,
    Blob = 4,
    Null = 5,
}

impl StorageClass {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            SQLITE_INTEGER => Some(StorageClass::Integer),
            SQLITE_FLOAT => Some(StorageClass::Float),
            SQLITE_TEXT => Some(StorageClass::Text),
            SQLITE_BLOB => Some(StorageClass::Blob),
            SQLITE_NULL => Some(StorageClass::Null),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StorageClass::Null)
    }

    /// The kind the generic value accessor produces for this class.
    pub fn natural_kind(&self) -> ScalarKind {
        match self {
            StorageClass::Integer => ScalarKind::Int64,
            StorageClass::Float => ScalarKind::Double,
            StorageClass::Text => ScalarKind::String,
            StorageClass::Blob => ScalarKind::Bytes,
            StorageClass::Null => ScalarKind::NullMarker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for class in [
            StorageClass::Integer,
            StorageClass::Float,
            StorageClass::Text,
            StorageClass::Blob,
            StorageClass::Null,
        ] {
            assert_eq!(StorageClass::from_code(class.code()), Some(class));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(StorageClass::from_code(0), None);
        assert_eq!(StorageClass::from_code(42), None);
    }

    #[test]
    fn test_natural_kind() {
        assert_eq!(StorageClass::Blob.natural_kind(), ScalarKind::Bytes);
        assert_eq!(StorageClass::Null.natural_kind(), ScalarKind::NullMarker);
    }
}
