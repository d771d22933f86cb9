mod field;
pub use field::FieldDescriptor;

mod model;
pub use model::{FieldSchema, ModelSchema, Register};

mod name;
pub use name::{underscore_name, Name};

mod registry;
pub use registry::Registry;

mod table;
pub use table::TableMetadata;
