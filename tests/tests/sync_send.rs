use tests::mock_db;
use toyorm::{col, driver::Transaction as TransactionOp, Inserter, Model, Selector};

fn assert_sync_send<T: Send>(val: T) -> T {
    val
}

#[derive(Debug, Default, Model)]
struct User {
    id: i64,
    email: String,
}

#[tokio::test]
async fn ensure_types_sync_send() {
    let (db, mock) = mock_db().await;
    let user = User::default();

    mock.expect_transaction(TransactionOp::Start)
        .expect_transaction(TransactionOp::Rollback);

    let mut db = assert_sync_send(db);
    let selector = Selector::<User>::new(&db).where_([col("email").eq("hello@example.com")]);
    let inserter = Inserter::new(&db).values([&user]);

    // Futures are only checked, never polled
    drop(assert_sync_send(selector.get()));
    drop(assert_sync_send(selector.get_multi()));
    drop(assert_sync_send(inserter.exec()));

    let tx = assert_sync_send(db.transaction()).await.unwrap();
    drop(assert_sync_send(Selector::<User, _>::new(&tx).get()));
    tx.rollback().await.unwrap();

    mock.assert_done();
}
