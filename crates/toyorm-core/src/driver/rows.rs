use crate::{
    stmt::{Type, Value},
    Error, Result,
};

use std::collections::VecDeque;

/// Rows returned by a query, along with the result column names.
///
/// Rows are consumed front to back through the [`Iterator`] impl.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Rows {
    columns: Vec<String>,
    rows: VecDeque<Row>,
}

/// One result row. Values are as the driver returned them and still need to
/// be converted with [`Row::scan`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Rows {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows: rows.into(),
        }
    }

    /// An empty result with the given columns.
    pub fn empty(columns: Vec<String>) -> Self {
        Self::new(columns, vec![])
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows not yet consumed.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push_back(row);
    }
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows.len(), Some(self.rows.len()))
    }
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Converts every column of the row to the matching type in `tys`.
    ///
    /// The conversion is all or nothing: if any column fails to convert, the
    /// error is returned and no values are produced.
    pub fn scan(self, tys: &[Type]) -> Result<Vec<Value>> {
        if self.values.len() > tys.len() {
            return Err(Error::too_many_columns(self.values.len(), tys.len()));
        }

        if self.values.len() < tys.len() {
            crate::bail!(
                "row has {} columns but {} were requested",
                self.values.len(),
                tys.len()
            );
        }

        self.values
            .into_iter()
            .zip(tys)
            .map(|(value, ty)| ty.cast(value))
            .collect()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
