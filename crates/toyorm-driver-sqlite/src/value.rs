use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use toyorm_core::stmt;

/// Binds a toyorm value as a SQLite parameter.
#[derive(Debug)]
pub(crate) struct Value<'a>(pub(crate) &'a stmt::Value);

/// Reads a column as the storage class SQLite reports for it.
///
/// No type information is applied here; the caller converts the result to the
/// declared field type.
pub(crate) fn load(value: ValueRef<'_>) -> stmt::Value {
    match value {
        ValueRef::Null => stmt::Value::Null,
        ValueRef::Integer(value) => stmt::Value::I64(value),
        ValueRef::Real(value) => stmt::Value::F64(value),
        ValueRef::Text(value) => match std::str::from_utf8(value) {
            Ok(value) => stmt::Value::String(value.to_string()),
            Err(_) => stmt::Value::Bytes(value.to_vec()),
        },
        ValueRef::Blob(value) => stmt::Value::Bytes(value.to_vec()),
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::U8(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U16(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::U64(v) => {
                let v = i64::try_from(*v)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                Ok(ToSqlOutput::Owned(SqlValue::Integer(v)))
            }
            Value::F32(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v as f64))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
