use pretty_assertions::assert_eq;
use tests::{mock_db, mock_driver::Call, rows, text};
use toyorm::{
    col,
    driver::{ExecOutcome, Transaction as TransactionOp},
    Inserter, Model, Selector, Session,
};

#[derive(Debug, Default, PartialEq, Model)]
struct User {
    id: i64,
    first_name: String,
    ctime: u64,
}

const INSERT: &str = "INSERT INTO `user`(`id`,`first_name`,`ctime`) VALUES(?,?,?);";
const SELECT: &str = "SELECT * FROM `user` WHERE `id` = ?;";

fn ops(calls: &[Call]) -> Vec<&str> {
    calls
        .iter()
        .map(|call| match call {
            Call::Exec { sql, .. } | Call::Query { sql, .. } => sql.as_str(),
            Call::Transaction(op) => op.sql(),
        })
        .collect()
}

#[tokio::test]
async fn commit() {
    let (mut db, mock) = mock_db().await;
    let user = User {
        id: 1,
        first_name: "Tom".to_string(),
        ctime: 1,
    };

    mock.expect_transaction(TransactionOp::Start)
        .expect_exec(INSERT, Ok(ExecOutcome::new(1, Some(1))))
        .expect_query(
            SELECT,
            Ok(rows(
                &["id", "first_name", "ctime"],
                vec![vec![text("1"), text("Tom"), text("1")]],
            )),
        )
        .expect_transaction(TransactionOp::Commit);

    let tx = db.transaction().await.unwrap();

    let res = Inserter::new(&tx).values([&user]).exec().await;
    assert_eq!(res.rows_affected().unwrap(), 1);

    let loaded: User = Selector::new(&tx)
        .where_([col("id").eq(1)])
        .get()
        .await
        .unwrap();
    assert_eq!(loaded, user);

    tx.commit().await.unwrap();

    assert_eq!(ops(&mock.calls()), ["BEGIN", INSERT, SELECT, "COMMIT"]);
    mock.assert_done();
}

#[tokio::test]
async fn rollback() {
    let (mut db, mock) = mock_db().await;

    mock.expect_transaction(TransactionOp::Start)
        .expect_transaction(TransactionOp::Rollback);

    let tx = db.transaction().await.unwrap();
    tx.rollback().await.unwrap();

    assert_eq!(ops(&mock.calls()), ["BEGIN", "ROLLBACK"]);
    mock.assert_done();
}

#[tokio::test]
async fn dropped_transaction_rolls_back_before_next_statement() {
    let (mut db, mock) = mock_db().await;

    mock.expect_transaction(TransactionOp::Start)
        .expect_transaction(TransactionOp::Rollback)
        .expect_exec("DELETE FROM `user`;", Ok(ExecOutcome::count(0)));

    {
        let _tx = db.transaction().await.unwrap();
    }

    // Nothing is sent from `Drop`
    tokio::task::yield_now().await;
    assert_eq!(ops(&mock.calls()), ["BEGIN"]);

    db.exec("DELETE FROM `user`;", &[]).await.unwrap();

    assert_eq!(ops(&mock.calls()), ["BEGIN", "ROLLBACK", "DELETE FROM `user`;"]);
    mock.assert_done();
}

#[tokio::test]
async fn dropped_transaction_rolls_back_before_next_transaction() {
    let (mut db, mock) = mock_db().await;

    mock.expect_transaction(TransactionOp::Start)
        .expect_transaction(TransactionOp::Rollback)
        .expect_transaction(TransactionOp::Start)
        .expect_transaction(TransactionOp::Commit);

    drop(db.transaction().await.unwrap());

    let tx = db.transaction().await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(ops(&mock.calls()), ["BEGIN", "ROLLBACK", "BEGIN", "COMMIT"]);
    mock.assert_done();
}

#[tokio::test]
async fn finished_transaction_schedules_nothing() {
    let (mut db, mock) = mock_db().await;

    mock.expect_transaction(TransactionOp::Start)
        .expect_transaction(TransactionOp::Commit)
        .expect_exec("DELETE FROM `user`;", Ok(ExecOutcome::count(0)));

    let tx = db.transaction().await.unwrap();
    tx.commit().await.unwrap();
    db.exec("DELETE FROM `user`;", &[]).await.unwrap();

    assert_eq!(ops(&mock.calls()), ["BEGIN", "COMMIT", "DELETE FROM `user`;"]);
    mock.assert_done();
}

#[tokio::test]
async fn in_transaction_commits_on_success() {
    let (mut db, mock) = mock_db().await;

    mock.expect_transaction(TransactionOp::Start)
        .expect_exec("DELETE FROM `user`;", Ok(ExecOutcome::count(2)))
        .expect_transaction(TransactionOp::Commit);

    let deleted = db
        .in_transaction(async |tx| {
            let outcome = tx.exec("DELETE FROM `user`;", &[]).await?;
            Ok(outcome.rows_affected)
        })
        .await
        .unwrap();

    assert_eq!(deleted, 2);
    mock.assert_done();
}

#[tokio::test]
async fn in_transaction_rolls_back_on_error() {
    let (mut db, mock) = mock_db().await;

    mock.expect_transaction(TransactionOp::Start)
        .expect_transaction(TransactionOp::Rollback);

    let err = db
        .in_transaction(async |tx| {
            Inserter::<User, _>::new(tx).exec().await.into_result()
        })
        .await
        .unwrap_err();

    assert!(err.is_empty_values());
    assert_eq!(ops(&mock.calls()), ["BEGIN", "ROLLBACK"]);
    mock.assert_done();
}

#[tokio::test]
async fn transaction_shares_registry() {
    let (mut db, mock) = mock_db().await;

    mock.expect_transaction(TransactionOp::Start)
        .expect_transaction(TransactionOp::Commit);

    let tx = db.transaction().await.unwrap();
    Selector::<User, _>::new(&tx).build().unwrap();
    assert!(Session::registry(&tx).contains::<User>());
    tx.commit().await.unwrap();

    assert!(db.registry().contains::<User>());
}
