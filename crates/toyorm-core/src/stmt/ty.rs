use super::Value;
use crate::{Error, Result};

/// A scalar value type.
///
/// Each model field declares one of these, and result columns are converted
/// to it when a row is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Raw bytes
    Bytes,

    /// 32-bit floating point number
    F32,

    /// 64-bit floating point number
    F64,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Converts `value` into a value of this type.
    ///
    /// Null is passed through unchanged; nullability is enforced when the
    /// value is loaded into a field.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match self {
            Self::Bool => Value::Bool(value.try_into()?),
            Self::Bytes => Value::Bytes(value.try_into()?),
            Self::F32 => Value::F32(value.try_into()?),
            Self::F64 => Value::F64(value.try_into()?),
            Self::I8 => Value::I8(value.try_into()?),
            Self::I16 => Value::I16(value.try_into()?),
            Self::I32 => Value::I32(value.try_into()?),
            Self::I64 => Value::I64(value.try_into()?),
            Self::String => Value::String(value.try_into()?),
            Self::U8 => Value::U8(value.try_into()?),
            Self::U16 => Value::U16(value.try_into()?),
            Self::U32 => Value::U32(value.try_into()?),
            Self::U64 => Value::U64(value.try_into()?),
        })
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // SQLite has no boolean storage class
            Value::I64(v) => Ok(v != 0),
            Value::I32(v) => Ok(v != 0),
            Value::U8(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(value, &Type::Bool)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => String::from_utf8(v).map_err(|e| {
                let bytes = e.into_bytes();
                Error::type_conversion(Value::Bytes(bytes), &Type::String)
            }),
            _ => Err(Error::type_conversion(value, &Type::String)),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            _ => Err(Error::type_conversion(value, &Type::Bytes)),
        }
    }
}
