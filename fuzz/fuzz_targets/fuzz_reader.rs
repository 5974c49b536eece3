//! Fuzz testing for the typed row reader.
//!
//! Builds rows of arbitrary cells and requests every scalar kind from every
//! cell, nullable and not. Reads may fail; they must never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use rowcast::{Narrowing, ReaderConfig, Row, RowReader, ScalarKind, Value};

#[derive(Debug, Arbitrary)]
enum FuzzCell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct ReaderInput {
    cells: Vec<FuzzCell>,
    checked: bool,
}

const KINDS: [ScalarKind; 21] = [
    ScalarKind::Bool,
    ScalarKind::Byte,
    ScalarKind::Bytes,
    ScalarKind::Char,
    ScalarKind::DateTime,
    ScalarKind::DateTimeOffset,
    ScalarKind::Decimal,
    ScalarKind::Double,
    ScalarKind::Float,
    ScalarKind::Guid,
    ScalarKind::Int32,
    ScalarKind::Int64,
    ScalarKind::SByte,
    ScalarKind::Int16,
    ScalarKind::String,
    ScalarKind::TimeSpan,
    ScalarKind::UInt32,
    ScalarKind::UInt64,
    ScalarKind::UInt16,
    ScalarKind::NullMarker,
    ScalarKind::Value,
];

fuzz_target!(|input: ReaderInput| {
    if input.cells.len() > 32 {
        return;
    }

    let row: Row = input
        .cells
        .into_iter()
        .map(|cell| match cell {
            FuzzCell::Null => Value::Null,
            FuzzCell::Int(i) => Value::Int(i),
            FuzzCell::Float(f) => Value::Float(f),
            FuzzCell::Text(s) => Value::Text(s),
            FuzzCell::Blob(b) => Value::Blob(b),
        })
        .collect();

    let narrowing = if input.checked {
        Narrowing::Checked
    } else {
        Narrowing::Truncate
    };
    let reader = RowReader::with_config(&row, ReaderConfig::new().with_narrowing(narrowing));

    for ordinal in 0..row.column_count() {
        for kind in KINDS {
            let _ = reader.get_kind(ordinal, kind, false);
            let _ = reader.get_kind(ordinal, kind, true);
        }
    }

    let mut buf = vec![Value::Null; row.column_count()];
    let count = reader.get_values(&mut buf).unwrap();
    assert_eq!(count, row.column_count());
    for (read, stored) in buf.iter().zip(&row.values) {
        assert_eq!(read.storage_class(), stored.storage_class());
    }
});
