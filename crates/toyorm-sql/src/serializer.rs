#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use crate::stmt::Statement;

use toyorm_core::{schema::TableMetadata, Result};

/// Serialize a statement to a SQL string
///
/// Identifiers are quoted with backticks and values are replaced by `?`
/// placeholders, their values pushed to `params` in placeholder order.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Table the statement targets. Column references are resolved against
    /// its fields.
    table: &'a TableMetadata,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    pub fn new(table: &'a TableMetadata) -> Self {
        Self { table }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt)?;

        ret.push(';');
        Ok(ret)
    }
}
