//! # Borrowed Cell View
//!
//! `CellRef` is a zero-copy view of one cell that probe adapters build from
//! their own storage. It implements SQLite's storage-class coercions for the
//! raw accessors, so asking an integer cell for text or a text cell for an
//! integer behaves the way `sqlite3_column_*` does:
//!
//! | Cell | integer | float | text | bytes |
//! |------|---------|-------|------|-------|
//! | Null | 0 | 0.0 | "" | absent |
//! | Integer | i | i as f64 | decimal digits | digits as bytes |
//! | Float | truncated | f | 15 significant digits | text as bytes |
//! | Text | numeric prefix | numeric prefix | text | UTF-8 bytes |
//! | Blob | numeric prefix | numeric prefix | lossy UTF-8 | bytes |

use crate::config::FLOAT_TEXT_DIGITS;
use crate::types::{StorageClass, Value};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellRef<'a> {
    Null,
    Integer(i64),
    Float(f64),
    /// UTF-8 text; kept as bytes since SQLite does not validate encoding.
    Text(&'a [u8]),
    Blob(&'a [u8]),
}

impl<'a> From<&'a Value> for CellRef<'a> {
    fn from(v: &'a Value) -> Self {
        match v {
            Value::Null => CellRef::Null,
            Value::Int(i) => CellRef::Integer(*i),
            Value::Float(f) => CellRef::Float(*f),
            Value::Text(s) => CellRef::Text(s.as_bytes()),
            Value::Blob(b) => CellRef::Blob(b),
        }
    }
}

impl<'a> CellRef<'a> {
    pub fn storage_class(&self) -> StorageClass {
        match self {
            CellRef::Null => StorageClass::Null,
            CellRef::Integer(_) => StorageClass::Integer,
            CellRef::Float(_) => StorageClass::Float,
            CellRef::Text(_) => StorageClass::Text,
            CellRef::Blob(_) => StorageClass::Blob,
        }
    }

    pub fn as_integer(&self) -> i64 {
        match self {
            CellRef::Null => 0,
            CellRef::Integer(i) => *i,
            CellRef::Float(f) => *f as i64,
            CellRef::Text(b) | CellRef::Blob(b) => integer_from_text(&String::from_utf8_lossy(b)),
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            CellRef::Null => 0.0,
            CellRef::Integer(i) => *i as f64,
            CellRef::Float(f) => *f,
            CellRef::Text(b) | CellRef::Blob(b) => float_from_text(&String::from_utf8_lossy(b)),
        }
    }

    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            CellRef::Null => Cow::Borrowed(""),
            CellRef::Integer(i) => Cow::Owned(i.to_string()),
            CellRef::Float(f) => Cow::Owned(format_float_text(f)),
            CellRef::Text(b) | CellRef::Blob(b) => String::from_utf8_lossy(b),
        }
    }

    pub fn as_bytes(&self) -> Option<Cow<'a, [u8]>> {
        match *self {
            CellRef::Null => None,
            CellRef::Text(b) | CellRef::Blob(b) => Some(Cow::Borrowed(b)),
            CellRef::Integer(_) | CellRef::Float(_) => match self.as_text() {
                Cow::Owned(s) => Some(Cow::Owned(s.into_bytes())),
                Cow::Borrowed(s) => Some(Cow::Borrowed(s.as_bytes())),
            },
        }
    }
}

/// Longest prefix of `s` (after leading whitespace) that reads as a number.
fn numeric_prefix(s: &str) -> (&str, bool) {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut is_real = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
            is_real = true;
        }
    }
    if digits == 0 {
        return ("", false);
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
            is_real = true;
        }
    }

    (&s[..end], is_real)
}

pub(crate) fn integer_from_text(s: &str) -> i64 {
    let (prefix, is_real) = numeric_prefix(s);
    if prefix.is_empty() {
        return 0;
    }
    if !is_real {
        if let Ok(i) = prefix.parse::<i64>() {
            return i;
        }
    }
    prefix.parse::<f64>().map(|f| f as i64).unwrap_or(0)
}

pub(crate) fn float_from_text(s: &str) -> f64 {
    let (prefix, _) = numeric_prefix(s);
    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Renders a float the way SQLite does (`%!.15g`).
pub(crate) fn format_float_text(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if f == 0.0 {
        return "0.0".to_string();
    }

    let precision = FLOAT_TEXT_DIGITS - 1;
    let sci = format!("{:.*e}", precision, f);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= FLOAT_TEXT_DIGITS as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exp.abs());
    }

    let decimals = (precision as i32 - exp).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, f))
}

/// Drops trailing fractional zeros but keeps at least one digit after `.`.
fn trim_fraction(s: &str) -> String {
    match s.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                format!("{}.0", int)
            } else {
                format!("{}.{}", int, frac)
            }
        }
        None => format!("{}.0", s),
    }
}
