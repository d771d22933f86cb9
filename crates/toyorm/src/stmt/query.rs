use toyorm_core::stmt::Value;

/// Rendered SQL and the values bound to its `?` placeholders, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Query {
    pub fn new(sql: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }
}
