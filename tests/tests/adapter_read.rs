use pretty_assertions::assert_eq;
use tabula::{Adapter, Condition, Criteria, Join, Model, Record, Status, Value};
use tests::{
    models::{memberships, user_row, users, User},
    MockConnection,
};

#[tokio::test]
async fn find_builds_a_loaded_model() {
    let mut conn = MockConnection::new();
    conn.respond_rows([user_row(1, "ann", true), user_row(2, "bo", false)]);
    let mut log = conn.log();

    let user = Adapter::new(&mut conn)
        .find(&users(), &Criteria::new().filter("name", "ann"), User::from_row)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.id, Some(1));
    assert!(user.active);
    assert_eq!(user.status(), Status::Loaded);

    let (sql, params) = log.pop().unwrap();
    assert_eq!(
        sql,
        "SELECT users.id, users.name, users.active, users.born FROM app.users \
         WHERE users.name = ? GROUP BY users.id"
    );
    assert_eq!(params, [Value::from("ann")]);
}

#[tokio::test]
async fn find_without_match_is_none() {
    let mut conn = MockConnection::new();
    conn.respond_empty();

    let found = Adapter::new(&mut conn)
        .find(&users(), &Criteria::new().filter("id", 404), User::from_row)
        .await
        .unwrap();

    assert_eq!(found, None);
}

#[tokio::test]
async fn find_all_keeps_database_order() {
    let meta = users();

    let mut conn = MockConnection::new();
    conn.respond_rows([user_row(3, "cy", true), user_row(1, "ann", true)]);

    let records = Adapter::new(&mut conn)
        .find_all(&meta, &Criteria::new().filter("active", 1), |row| {
            Ok(Record::from_row(meta.clone(), row))
        })
        .await
        .unwrap();

    let ids: Vec<_> = records.iter().map(|r| r.get("id").cloned()).collect();
    assert_eq!(ids, [Some(Value::U64(3)), Some(Value::U64(1))]);
    assert!(records.iter().all(|r| r.status() == Status::Loaded));
}

#[tokio::test]
async fn find_all_without_match_is_empty() {
    let mut conn = MockConnection::new();

    let found = Adapter::new(&mut conn)
        .find_all(&users(), &Criteria::new(), User::from_row)
        .await
        .unwrap();

    assert!(found.is_empty());
}

#[tokio::test]
async fn join_literals_are_escaped_by_the_connection() {
    let mut conn = MockConnection::new();
    let mut log = conn.log();

    let criteria = Criteria::new().filter("id", Condition::gt(10)).join(
        Join::new(&memberships())
            .left()
            .on("role", "it's")
            .on("memberships.user_id", Condition::raw_field("users.id")),
    );

    Adapter::new(&mut conn)
        .find_all(&users(), &criteria, User::from_row)
        .await
        .unwrap();

    let (sql, params) = log.pop().unwrap();
    assert_eq!(
        sql,
        "SELECT users.id, users.name, users.active, users.born FROM app.users \
         LEFT JOIN memberships ON role = 'it\\'s' AND memberships.user_id = users.id \
         WHERE users.id > ? GROUP BY users.id"
    );
    assert_eq!(params, [Value::I64(10)]);
}

#[tokio::test]
async fn raw_query_helpers() {
    let mut conn = MockConnection::new();
    let mut count = tabula::Row::new();
    count.insert("n", 3);
    conn.respond_rows([count])
        .respond_rows([user_row(1, "ann", true), user_row(2, "bo", true)])
        .respond_rows([user_row(1, "ann", true)]);

    let mut db = Adapter::new(&mut conn);

    let n = db
        .one_scalar("SELECT COUNT(*) AS n FROM app.users", &[])
        .await
        .unwrap();
    assert_eq!(n, Value::I64(3));

    let ids = db.one_column("SELECT id FROM app.users", &[]).await.unwrap();
    assert_eq!(ids, [Value::U64(1), Value::U64(2)]);

    let row = db
        .one_row("SELECT * FROM app.users WHERE id = ?", &[Value::from(1)])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.get("name"), Some(&Value::from("ann")));
}

#[tokio::test]
async fn scalar_and_column_queries_fail_on_empty_results() {
    let mut conn = MockConnection::new();
    let mut db = Adapter::new(&mut conn);

    let err = db.one_scalar("SELECT 1 FROM dual WHERE 0", &[]).await.unwrap_err();
    assert!(err.is_empty_result());

    let err = db.one_column("SELECT id FROM app.users", &[]).await.unwrap_err();
    assert!(err.is_empty_result());

    assert!(db.one_row("SELECT id FROM app.users", &[]).await.unwrap().is_none());
    assert!(db.all_rows("SELECT id FROM app.users", &[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn query_errors_propagate() {
    let mut conn = MockConnection::new();
    conn.fail(tabula::Error::query(std::io::Error::other("server has gone away")));

    let err = Adapter::new(&mut conn)
        .find(&users(), &Criteria::new(), User::from_row)
        .await
        .unwrap_err();

    assert!(err.is_query());
}
