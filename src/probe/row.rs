use super::{CellRef, StorageProbe};
use crate::types::Value;
use eyre::{bail, Result};
use std::borrow::Cow;

/// An owned row of cell values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn column_count(&self) -> usize {
        self.values.len()
    }

    fn cell(&self, index: usize) -> Result<CellRef<'_>> {
        match self.get(index) {
            Some(v) => Ok(CellRef::from(v)),
            None => bail!("column {} out of bounds", index),
        }
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl StorageProbe for Row {
    fn field_count(&self) -> usize {
        self.column_count()
    }

    fn storage_code(&self, ordinal: usize) -> Result<i32> {
        match self.get(ordinal) {
            Some(v) => Ok(v.storage_class().code()),
            None => bail!("column {} out of bounds", ordinal),
        }
    }

    fn read_integer(&self, ordinal: usize) -> Result<i64> {
        Ok(self.cell(ordinal)?.as_integer())
    }

    fn read_float(&self, ordinal: usize) -> Result<f64> {
        Ok(self.cell(ordinal)?.as_float())
    }

    fn read_text(&self, ordinal: usize) -> Result<Cow<'_, str>> {
        Ok(self.cell(ordinal)?.as_text())
    }

    fn read_bytes(&self, ordinal: usize) -> Result<Option<Cow<'_, [u8]>>> {
        Ok(self.cell(ordinal)?.as_bytes())
    }
}
