mod insert;
pub use insert::Insert;

mod select;
pub use select::{Select, TableRef};

pub use toyorm_core::stmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Select(Select),
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
