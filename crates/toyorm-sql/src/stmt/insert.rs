use super::{ExprColumn, Value};

/// `INSERT INTO <table>(<columns>) VALUES (<row>), ...`
///
/// Each row holds one value per column, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insert {
    pub columns: Vec<ExprColumn>,
    pub rows: Vec<Vec<Value>>,
}

impl Insert {
    pub fn new(columns: impl IntoIterator<Item = ExprColumn>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            rows: vec![],
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    pub fn num_args(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
