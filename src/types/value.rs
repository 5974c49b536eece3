//! # Generic Cell Values
//!
//! `Value` is what the generic value accessor returns: the cell's payload in
//! its natural representation, copied out of the probe so it never aliases
//! the row after the call returns.
//!
//! | Variant | Rust Type | Storage class |
//! |---------|-----------|---------------|
//! | Null | - | Null (the null marker) |
//! | Int | i64 | Integer |
//! | Float | f64 | Float |
//! | Text | String | Text |
//! | Blob | Vec<u8> | Blob |
//!
//! [`DbNull`] is the explicit null-marker type. Requesting it through
//! `RowReader::get` only succeeds on a null cell.

use super::StorageClass;

/// Owned value of a single cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Distinguished marker for "no value", distinct from any type's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DbNull;

impl std::fmt::Display for DbNull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NULL")
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn storage_class(&self) -> StorageClass {
        match self {
            Value::Null => StorageClass::Null,
            Value::Int(_) => StorageClass::Integer,
            Value::Float(_) => StorageClass::Float,
            Value::Text(_) => StorageClass::Text,
            Value::Blob(_) => StorageClass::Blob,
        }
    }

    pub fn display_string(&self) -> String {
        match self {
            Value::Null => DbNull.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Blob(b) => format!("\\x{}", hex::encode(b)),
        }
    }
}

mod hex {
    pub fn encode(data: &[u8]) -> String {
        data.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl From<DbNull> for Value {
    fn from(_: DbNull) -> Self {
        Value::Null
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Blob(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Blob(b.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}
