use pretty_assertions::assert_eq;
use tests::mock_db;
use toyorm::{col, not, Model, Predicate, Selector, Value};

#[derive(Debug, Default, PartialEq, Model)]
struct TestModel {
    id: i64,
    first_name: String,
    age: i8,
    last_name: Option<String>,
}

#[tokio::test]
async fn no_from() {
    let (db, mock) = mock_db().await;

    let query = Selector::<TestModel>::new(&db).build().unwrap();

    assert_eq!(query.sql, "SELECT * FROM `test_model`;");
    assert!(query.args.is_empty());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn empty_from() {
    let (db, _) = mock_db().await;

    let query = Selector::<TestModel>::new(&db).from("").build().unwrap();
    assert_eq!(query.sql, "SELECT * FROM `test_model`;");
}

#[tokio::test]
async fn with_from() {
    let (db, _) = mock_db().await;

    let query = Selector::<TestModel>::new(&db)
        .from("`test_model`")
        .build()
        .unwrap();
    assert_eq!(query.sql, "SELECT * FROM `test_model`;");

    let query = Selector::<TestModel>::new(&db)
        .from("test_db.test_model")
        .build()
        .unwrap();
    assert_eq!(query.sql, "SELECT * FROM test_db.test_model;");
}

#[tokio::test]
async fn single_predicate() {
    let (db, _) = mock_db().await;

    let query = Selector::<TestModel>::new(&db)
        .where_([col("id").eq(1)])
        .build()
        .unwrap();

    assert_eq!(query.sql, "SELECT * FROM `test_model` WHERE `id` = ?;");
    assert_eq!(query.args, [Value::I32(1)]);
}

#[tokio::test]
async fn multiple_predicates() {
    let (db, _) = mock_db().await;

    let query = Selector::<TestModel>::new(&db)
        .where_([col("age").gt(18), col("age").lt(35)])
        .build()
        .unwrap();

    assert_eq!(
        query.sql,
        "SELECT * FROM `test_model` WHERE (`age` > ?) AND (`age` < ?);"
    );
    assert_eq!(query.args, [Value::I32(18), Value::I32(35)]);
}

#[tokio::test]
async fn and_matches_multiple_predicates() {
    let (db, _) = mock_db().await;

    let combined = Selector::<TestModel>::new(&db)
        .where_([col("age").gt(18).and(col("age").lt(35))])
        .build()
        .unwrap();
    let separate = Selector::<TestModel>::new(&db)
        .where_([col("age").gt(18), col("age").lt(35)])
        .build()
        .unwrap();

    assert_eq!(combined, separate);
}

#[tokio::test]
async fn or() {
    let (db, _) = mock_db().await;

    let query = Selector::<TestModel>::new(&db)
        .where_([col("age").gt(18).or(col("age").lt(35))])
        .build()
        .unwrap();

    assert_eq!(
        query.sql,
        "SELECT * FROM `test_model` WHERE (`age` > ?) OR (`age` < ?);"
    );
    assert_eq!(query.args, [Value::I32(18), Value::I32(35)]);
}

#[tokio::test]
async fn not_predicate() {
    let (db, _) = mock_db().await;

    let query = Selector::<TestModel>::new(&db)
        .where_([not(col("age").gt(18))])
        .build()
        .unwrap();

    assert_eq!(query.sql, "SELECT * FROM `test_model` WHERE  NOT (`age` > ?);");
    assert_eq!(query.args, [Value::I32(18)]);
}

#[tokio::test]
async fn where_replaces_predicates() {
    let (db, _) = mock_db().await;

    let query = Selector::<TestModel>::new(&db)
        .where_([col("age").gt(18)])
        .where_([col("id").eq(7_i64)])
        .build()
        .unwrap();

    assert_eq!(query.sql, "SELECT * FROM `test_model` WHERE `id` = ?;");
    assert_eq!(query.args, [Value::I64(7)]);

    let query = Selector::<TestModel>::new(&db)
        .where_([col("age").gt(18)])
        .where_(Vec::<Predicate>::new())
        .build()
        .unwrap();

    assert_eq!(query.sql, "SELECT * FROM `test_model`;");
}

#[tokio::test]
async fn invalid_column() {
    let (db, _) = mock_db().await;

    let err = Selector::<TestModel>::new(&db)
        .where_([col("invalid_column").eq(1)])
        .build()
        .unwrap_err();

    assert!(err.is_unknown_column());
    assert_eq!(err.to_string(), "unknown column: invalid_column");
}

#[tokio::test]
async fn placeholder_count_matches_args() {
    let (db, _) = mock_db().await;

    let query = Selector::<TestModel>::new(&db)
        .where_([
            col("first_name").eq("Da"),
            not(col("age").lt(18).or(col("age").gt(65))),
            col("last_name").eq(Value::Null),
        ])
        .build()
        .unwrap();

    assert_eq!(query.sql.matches('?').count(), query.args.len());
    assert_eq!(query.args.len(), 4);
}
