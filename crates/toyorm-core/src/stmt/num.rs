use super::{Type, Value};
use crate::{Error, Result};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
}

// Integer conversions accept any integer variant that fits the target range,
// and textual representations. Drivers that hand back untyped text or bytes
// (e.g. `b"18"`) can therefore be scanned straight into numeric fields.
macro_rules! impl_try_from_value_int {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I8(v) => <$ty>::try_from(*v).ok(),
                        Value::I16(v) => <$ty>::try_from(*v).ok(),
                        Value::I32(v) => <$ty>::try_from(*v).ok(),
                        Value::I64(v) => <$ty>::try_from(*v).ok(),
                        Value::U8(v) => <$ty>::try_from(*v).ok(),
                        Value::U16(v) => <$ty>::try_from(*v).ok(),
                        Value::U32(v) => <$ty>::try_from(*v).ok(),
                        Value::U64(v) => <$ty>::try_from(*v).ok(),
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        Value::Bytes(b) => std::str::from_utf8(b)
                            .ok()
                            .and_then(|s| s.trim().parse::<$ty>().ok()),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, &Type::$variant))
                }
            }
        )*
    };
}

impl_try_from_value_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64
}

macro_rules! impl_try_from_value_float {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::F32(v) => Some(*v as $ty),
                        Value::F64(v) => Some(*v as $ty),
                        Value::I8(v) => Some(*v as $ty),
                        Value::I16(v) => Some(*v as $ty),
                        Value::I32(v) => Some(*v as $ty),
                        Value::I64(v) => Some(*v as $ty),
                        Value::U8(v) => Some(*v as $ty),
                        Value::U16(v) => Some(*v as $ty),
                        Value::U32(v) => Some(*v as $ty),
                        Value::U64(v) => Some(*v as $ty),
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        Value::Bytes(b) => std::str::from_utf8(b)
                            .ok()
                            .and_then(|s| s.trim().parse::<$ty>().ok()),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, &Type::$variant))
                }
            }
        )*
    };
}

impl_try_from_value_float! {
    f32 => F32,
    f64 => F64
}
