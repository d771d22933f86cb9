#[macro_use]
mod macros;

pub use logging_driver::{DriverOp, LoggingDriver};

pub use mock_driver::MockDriver;

pub use std_util::*;

use toyorm::{Db, Value};
use toyorm_core::driver::{Row, Rows};

/// Installs the test logger. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a result set from column names and rows of values.
pub fn rows(columns: &[&str], rows: Vec<Vec<Value>>) -> Rows {
    Rows::new(
        columns.iter().map(|column| column.to_string()).collect(),
        rows.into_iter().map(Row::new).collect(),
    )
}

/// A text value as drivers without type information report it.
pub fn text(s: &str) -> Value {
    Value::Bytes(s.as_bytes().to_vec())
}

/// Connects a `Db` to a fresh mock driver.
pub async fn mock_db() -> (Db, MockDriver) {
    init_logging();

    let mock = MockDriver::new();
    let db = Db::builder().build(mock.clone()).await.unwrap();
    (db, mock)
}
