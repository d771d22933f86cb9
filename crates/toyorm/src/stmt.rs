mod insert;
pub use insert::Inserter;

mod query;
pub use query::Query;

mod result;
pub use result::ExecResult;

mod scan;
use scan::Scan;

mod select;
pub use select::Selector;

pub use toyorm_core::stmt::*;
