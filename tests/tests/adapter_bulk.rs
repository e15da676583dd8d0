use pretty_assertions::assert_eq;
use tabula::{Adapter, Model, Record, Status, Value};
use tests::{
    models::{memberships, users, User},
    MockConnection,
};

#[tokio::test]
async fn bulk_insert_writes_one_statement() {
    let mut conn = MockConnection::new();
    conn.respond_write(2, 10);
    let mut log = conn.log();

    let users = [User::new("ann", true), User::new("bo", false)];
    Adapter::new(&mut conn).bulk_insert(&users).await.unwrap();

    let (sql, params) = log.pop().unwrap();
    assert_eq!(
        sql,
        "INSERT INTO app.users (name, active) VALUES (?, ?), (?, ?)"
    );
    assert_eq!(
        params,
        [
            Value::from("ann"),
            Value::I64(1),
            Value::from("bo"),
            Value::I64(0)
        ]
    );

    // No reload, no status change
    assert!(log.is_empty());
    assert!(users.iter().all(|user| user.status() == Status::New));
}

#[tokio::test]
async fn bulk_remove_matches_every_key() {
    let mut conn = MockConnection::new();
    let mut log = conn.log();

    let records = [(1, 2), (1, 3), (4, 2)].map(|(user_id, team_id)| {
        let mut record = Record::new(memberships());
        record.set("user_id", user_id).set("team_id", team_id);
        record
    });

    Adapter::new(&mut conn).bulk_remove(&records).await.unwrap();

    let (sql, params) = log.pop().unwrap();
    assert_eq!(
        sql,
        "DELETE FROM memberships WHERE (user_id = ? AND team_id = ?) \
         OR (user_id = ? AND team_id = ?) OR (user_id = ? AND team_id = ?)"
    );
    assert_eq!(params.len(), 6);
    assert_eq!(params[4], Value::I64(4));
}

#[tokio::test]
async fn empty_bulk_operations_are_rejected() {
    let mut conn = MockConnection::new();
    let log = conn.log();
    let mut db = Adapter::new(&mut conn);

    let none: [User; 0] = [];

    assert!(db.bulk_insert(&none).await.unwrap_err().is_invalid_argument());
    assert!(db.bulk_remove(&none).await.unwrap_err().is_invalid_argument());
    assert!(log.is_empty());
}

#[tokio::test]
async fn bulk_operations_reject_mixed_tables() {
    let mut conn = MockConnection::new();
    let log = conn.log();

    let mut user = Record::new(users());
    user.set("id", 1);
    let mut membership = Record::new(memberships());
    membership.set("user_id", 1).set("team_id", 1);

    let err = Adapter::new(&mut conn)
        .bulk_remove(&[user, membership])
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(log.is_empty());
}
