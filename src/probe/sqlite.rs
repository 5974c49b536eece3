//! `StorageProbe` for a live `rusqlite` cursor row.
//!
//! Each accessor re-reads the cell through `Row::get_ref`, so the probe
//! always reflects the row the statement is currently positioned on.

use super::{CellRef, StorageProbe};
use eyre::{Result, WrapErr};
use rusqlite::types::ValueRef;
use std::borrow::Cow;

fn cell<'a>(row: &'a rusqlite::Row<'_>, ordinal: usize) -> Result<CellRef<'a>> {
    let value = row
        .get_ref(ordinal)
        .wrap_err_with(|| format!("failed to read column {}", ordinal))?;
    Ok(match value {
        ValueRef::Null => CellRef::Null,
        ValueRef::Integer(i) => CellRef::Integer(i),
        ValueRef::Real(f) => CellRef::Float(f),
        ValueRef::Text(t) => CellRef::Text(t),
        ValueRef::Blob(b) => CellRef::Blob(b),
    })
}

impl StorageProbe for rusqlite::Row<'_> {
    fn field_count(&self) -> usize {
        self.as_ref().column_count()
    }

    fn storage_code(&self, ordinal: usize) -> Result<i32> {
        Ok(cell(self, ordinal)?.storage_class().code())
    }

    fn read_integer(&self, ordinal: usize) -> Result<i64> {
        Ok(cell(self, ordinal)?.as_integer())
    }

    fn read_float(&self, ordinal: usize) -> Result<f64> {
        Ok(cell(self, ordinal)?.as_float())
    }

    fn read_text(&self, ordinal: usize) -> Result<Cow<'_, str>> {
        Ok(cell(self, ordinal)?.as_text())
    }

    fn read_bytes(&self, ordinal: usize) -> Result<Option<Cow<'_, [u8]>>> {
        Ok(cell(self, ordinal)?.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SQLITE_BLOB, SQLITE_FLOAT, SQLITE_INTEGER, SQLITE_NULL, SQLITE_TEXT};
    use rusqlite::Connection;

    #[test]
    fn test_sqlite_row_codes() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn
            .prepare("SELECT 1, 2.5, 'three', x'04', NULL")
            .unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();

        assert_eq!(row.field_count(), 5);
        let codes: Vec<i32> = (0..5).map(|i| row.storage_code(i).unwrap()).collect();
        assert_eq!(
            codes,
            vec![SQLITE_INTEGER, SQLITE_FLOAT, SQLITE_TEXT, SQLITE_BLOB, SQLITE_NULL]
        );
        assert_eq!(row.read_text(2).unwrap(), "three");
        assert_eq!(row.read_bytes(3).unwrap().as_deref(), Some(&[4u8][..]));
        assert_eq!(row.read_bytes(4).unwrap(), None);
    }

    #[test]
    fn test_sqlite_row_out_of_range() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare("SELECT 1").unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();
        assert!(row.storage_code(3).is_err());
    }
}
