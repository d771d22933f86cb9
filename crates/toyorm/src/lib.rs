pub mod db;
pub use db::Db;

pub mod driver;

mod model;
pub use model::Model;

mod session;
pub use session::Session;

pub mod stmt;
pub use stmt::{ExecResult, Inserter, Query, Selector};

mod transaction;
pub use transaction::Transaction;

pub use toyorm_macros::Model;

pub use toyorm_core::{
    schema::{Register, Registry},
    stmt::{col, not, Predicate, Primitive, Type, Value},
    Error, Result,
};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Model, Result};
    pub use toyorm_core::{
        schema::{ModelSchema, Register},
        stmt::{Primitive, Type, Value},
    };
}
