use super::Predicate;

/// `SELECT * FROM <table> [WHERE <filter>]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub table: TableRef,

    /// Filter, if any. Column references use logical field names.
    pub filter: Option<Predicate>,
}

/// The source of a select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableRef {
    /// The model's own table, rendered as a quoted identifier.
    #[default]
    Model,

    /// Raw SQL text emitted as-is, e.g. `` `test_db`.`test_model` ``.
    Raw(String),
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, table: impl Into<TableRef>) -> Self {
        self.table = table.into();
        self
    }

    pub fn filter(mut self, filter: impl Into<Option<Predicate>>) -> Self {
        self.filter = filter.into();
        self
    }
}

impl TableRef {
    /// Creates a raw table reference. An empty string selects the model's
    /// table.
    pub fn raw(sql: impl Into<String>) -> Self {
        let sql = sql.into();

        if sql.is_empty() {
            Self::Model
        } else {
            Self::Raw(sql)
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model)
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        Self::raw(value)
    }
}

impl From<String> for TableRef {
    fn from(value: String) -> Self {
        Self::raw(value)
    }
}
