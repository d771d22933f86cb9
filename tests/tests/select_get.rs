use pretty_assertions::assert_eq;
use tests::{assert_err, assert_ok, mock_db, mock_driver::Call, rows, text};
use toyorm::{col, Error, Model, Selector, Value};
use toyorm_core::driver::Rows;

#[derive(Debug, Default, PartialEq, Model)]
struct TestModel {
    id: i64,
    first_name: String,
    age: i8,
    last_name: Option<String>,
}

const SELECT_BY_ID: &str = "SELECT * FROM `test_model` WHERE `id` = ?;";
const SELECT_ALL: &str = "SELECT * FROM `test_model`;";

fn columns() -> [&'static str; 4] {
    ["id", "first_name", "age", "last_name"]
}

fn da_ming() -> TestModel {
    TestModel {
        id: 1,
        first_name: "Da".to_string(),
        age: 18,
        last_name: Some("Ming".to_string()),
    }
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_data() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_BY_ID,
        Ok(rows(
            &columns(),
            vec![vec![text("1"), text("Da"), text("18"), text("Ming")]],
        )),
    );

    let model = assert_ok!(
        Selector::<TestModel>::new(&db)
            .where_([col("id").eq(1)])
            .get()
            .await
    );

    assert_eq!(model, da_ming());
    assert_eq!(
        mock.calls(),
        [Call::Query {
            sql: SELECT_BY_ID.to_string(),
            args: vec![Value::I32(1)],
        }]
    );
    mock.assert_done();
}

#[tokio::test]
async fn get_returns_first_row() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_ALL,
        Ok(rows(
            &columns(),
            vec![
                vec![Value::I64(1), Value::from("Da"), Value::I64(18), Value::from("Ming")],
                vec![Value::I64(2), Value::from("Xiao"), Value::I64(20), Value::Null],
            ],
        )),
    );

    let model = Selector::<TestModel>::new(&db).get().await.unwrap();
    assert_eq!(model, da_ming());
}

#[tokio::test]
async fn get_subset_of_columns() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_ALL,
        Ok(rows(&["first_name", "id"], vec![vec![text("Da"), text("3")]])),
    );

    let model = Selector::<TestModel>::new(&db).get().await.unwrap();

    assert_eq!(
        model,
        TestModel {
            id: 3,
            first_name: "Da".to_string(),
            ..TestModel::default()
        }
    );
}

#[tokio::test]
async fn query_error_passes_through() {
    let (db, mock) = mock_db().await;

    let io = std::io::Error::other("mock error");
    mock.expect_query(SELECT_BY_ID, Err(Error::driver(io)));

    let err = Selector::<TestModel>::new(&db)
        .where_([col("id").eq(1)])
        .get()
        .await
        .unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "mock error");
}

#[tokio::test]
async fn no_row() {
    let (db, mock) = mock_db().await;

    mock.expect_query(SELECT_BY_ID, Ok(Rows::empty(columns().map(String::from).to_vec())));

    let err = assert_err!(
        Selector::<TestModel>::new(&db)
            .where_([col("id").eq(1)])
            .get()
            .await
    );

    assert!(err.is_no_rows());
}

#[tokio::test]
async fn too_many_columns() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_BY_ID,
        Ok(rows(
            &["id", "first_name", "age", "last_name", "extra_column"],
            vec![vec![text("1"), text("Da"), text("18"), text("Ming"), text("x")]],
        )),
    );

    let err = Selector::<TestModel>::new(&db)
        .where_([col("id").eq(1)])
        .get()
        .await
        .unwrap_err();

    assert!(err.is_too_many_columns());
    assert_eq!(
        err.to_string(),
        "too many columns: result has 5 columns but the model has 4 fields"
    );
}

#[tokio::test]
async fn unknown_result_column() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_BY_ID,
        Ok(rows(&["id", "email"], vec![vec![text("1"), text("a@b.c")]])),
    );

    let err = Selector::<TestModel>::new(&db)
        .where_([col("id").eq(1)])
        .get()
        .await
        .unwrap_err();

    assert!(err.is_unknown_column());
    assert_eq!(err.to_string(), "unknown column: email");
}

#[tokio::test]
async fn unconvertible_value() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_BY_ID,
        Ok(rows(
            &columns(),
            vec![vec![text("1"), text("Da"), text("eighteen"), text("Ming")]],
        )),
    );

    let err = Selector::<TestModel>::new(&db)
        .where_([col("id").eq(1)])
        .get()
        .await
        .unwrap_err();

    assert!(err.is_type_conversion());
}

#[tokio::test]
async fn build_error_skips_query() {
    let (db, mock) = mock_db().await;

    let err = Selector::<TestModel>::new(&db)
        .where_([col("invalid_column").eq(1)])
        .get()
        .await
        .unwrap_err();

    assert!(err.is_unknown_column());
    assert!(mock.calls().is_empty());
}

// ---------------------------------------------------------------------------
// get_multi
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_multi_returns_rows_in_order() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_ALL,
        Ok(rows(
            &columns(),
            vec![
                vec![text("1"), text("Da"), text("18"), text("Ming")],
                vec![text("2"), text("Xiao"), text("20"), Value::Null],
            ],
        )),
    );

    let models = Selector::<TestModel>::new(&db).get_multi().await.unwrap();

    assert_eq!(
        models,
        [
            da_ming(),
            TestModel {
                id: 2,
                first_name: "Xiao".to_string(),
                age: 20,
                last_name: None,
            }
        ]
    );
}

#[tokio::test]
async fn get_multi_empty() {
    let (db, mock) = mock_db().await;

    mock.expect_query(SELECT_ALL, Ok(rows(&columns(), vec![])));

    let models = Selector::<TestModel>::new(&db).get_multi().await.unwrap();
    assert!(models.is_empty());
}

#[tokio::test]
async fn get_multi_fails_fast() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_ALL,
        Ok(rows(
            &columns(),
            vec![
                vec![text("1"), text("Da"), text("18"), text("Ming")],
                vec![text("2"), text("Xiao"), text("old"), Value::Null],
                vec![text("3"), text("Lao"), text("60"), Value::Null],
            ],
        )),
    );

    let err = Selector::<TestModel>::new(&db)
        .get_multi()
        .await
        .unwrap_err();

    assert!(err.is_type_conversion());
}

#[tokio::test]
async fn get_multi_checks_columns() {
    let (db, mock) = mock_db().await;

    mock.expect_query(
        SELECT_ALL,
        Ok(rows(&["id", "email"], vec![vec![text("1"), text("a@b.c")]])),
    );

    let err = Selector::<TestModel>::new(&db)
        .get_multi()
        .await
        .unwrap_err();

    assert!(err.is_unknown_column());
}
