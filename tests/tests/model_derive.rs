use pretty_assertions::assert_eq;
use toyorm::{Model, Register, Registry, Type, Value};

#[derive(Debug, Default, PartialEq, Model)]
struct TestModel {
    id: i64,
    first_name: String,
    age: i8,
    last_name: Option<String>,
}

#[derive(Debug, Default, PartialEq, Model)]
struct Flags {
    enabled: bool,
    r#type: String,
    score: f64,
    payload: Vec<u8>,
}

#[test]
fn schema_lists_fields_in_declaration_order() {
    let schema = TestModel::schema();

    assert_eq!(schema.name, "TestModel");
    assert_eq!(
        schema
            .fields
            .iter()
            .map(|field| (field.name.as_str(), field.ty, field.nullable))
            .collect::<Vec<_>>(),
        [
            ("id", Type::I64, false),
            ("first_name", Type::String, false),
            ("age", Type::I8, false),
            ("last_name", Type::String, true),
        ]
    );
}

#[test]
fn derived_metadata() {
    let registry = Registry::new();
    let table = registry.get::<TestModel>().unwrap();

    assert_eq!(table.table_name, "test_model");
    assert_eq!(
        table.fields().collect::<Vec<_>>(),
        ["id", "first_name", "age", "last_name"]
    );
}

#[test]
fn raw_identifiers_use_plain_names() {
    let registry = Registry::new();
    let table = registry.get::<Flags>().unwrap();

    assert_eq!(table.field("type").unwrap().column_name, "type");
    assert_eq!(table.field("payload").unwrap().ty, Type::Bytes);
}

#[test]
fn field_values() {
    let model = TestModel {
        id: 1,
        first_name: "Da".to_string(),
        age: 18,
        last_name: None,
    };

    assert_eq!(model.field_value("id").unwrap(), Value::I64(1));
    assert_eq!(model.field_value("first_name").unwrap(), Value::from("Da"));
    assert_eq!(model.field_value("age").unwrap(), Value::I8(18));
    assert_eq!(model.field_value("last_name").unwrap(), Value::Null);
    assert!(model.field_value("email").unwrap_err().is_unknown_column());
}

#[test]
fn set_fields() {
    let mut model = TestModel::default();

    model.set_field("id", Value::I64(1)).unwrap();
    model.set_field("first_name", Value::from("Da")).unwrap();
    model.set_field("age", Value::I8(18)).unwrap();
    model.set_field("last_name", Value::from("Ming")).unwrap();

    assert_eq!(
        model,
        TestModel {
            id: 1,
            first_name: "Da".to_string(),
            age: 18,
            last_name: Some("Ming".to_string()),
        }
    );

    model.set_field("last_name", Value::Null).unwrap();
    assert_eq!(model.last_name, None);
}

#[test]
fn set_field_rejects_mismatched_values() {
    let mut model = TestModel::default();

    assert!(model
        .set_field("first_name", Value::I64(1))
        .unwrap_err()
        .is_type_conversion());
    assert!(model.set_field("id", Value::Null).unwrap_err().is_type_conversion());
    assert!(model
        .set_field("email", Value::from("a@b.c"))
        .unwrap_err()
        .is_unknown_column());

    assert_eq!(model, TestModel::default());
}

#[test]
fn non_string_primitives() {
    let mut flags = Flags::default();

    flags.set_field("enabled", Value::I64(1)).unwrap();
    flags.set_field("score", Value::F64(0.5)).unwrap();
    flags.set_field("payload", Value::Bytes(vec![1, 2])).unwrap();

    assert!(flags.enabled);
    assert_eq!(flags.field_value("score").unwrap(), Value::F64(0.5));
    assert_eq!(flags.field_value("payload").unwrap(), Value::Bytes(vec![1, 2]));
}
