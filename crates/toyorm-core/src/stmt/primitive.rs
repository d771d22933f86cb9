use super::{Type, Value};
use crate::Result;

/// A field type that can be stored in a single column.
///
/// Derived models call [`Primitive::TYPE`] and [`Primitive::NULLABLE`] to
/// describe their fields, [`Primitive::to_value`] to bind field values to
/// statements, and [`Primitive::load`] to assign scanned values back.
pub trait Primitive: Sized {
    const TYPE: Type;
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    String => String,
    Vec<u8> => Bytes
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
