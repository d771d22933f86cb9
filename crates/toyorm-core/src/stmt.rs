mod expr;
pub use expr::Expr;

mod expr_column;
pub use expr_column::{col, ExprColumn};

mod num;

mod op;
pub use op::Op;

mod predicate;
pub use predicate::{not, Predicate};

mod primitive;
pub use primitive::Primitive;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
