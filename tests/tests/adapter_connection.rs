use pretty_assertions::assert_eq;
use tabula::{Adapter, Config, Connection, Model, Status};
use tests::{
    models::{user_row, User},
    MockConnection,
};

#[tokio::test]
async fn transaction_statements() {
    let mut conn = MockConnection::new();
    // START TRANSACTION, INSERT, reload
    conn.respond_write(0, 0)
        .respond_write(1, 5)
        .respond_rows([user_row(5, "ann", true)]);
    let log = conn.log();

    let mut db = Adapter::new(&mut conn);
    db.start_transaction().await.unwrap();

    let mut user = User::new("ann", true);
    db.insert(&mut user).await.unwrap();
    db.commit_transaction().await.unwrap();

    db.start_transaction().await.unwrap();
    db.rollback_transaction().await.unwrap();

    let statements = log.statements();
    assert_eq!(statements.len(), 6);
    assert_eq!(statements[0], "START TRANSACTION");
    assert!(statements[1].starts_with("INSERT INTO app.users"));
    assert!(statements[2].starts_with("SELECT"));
    assert_eq!(statements[3], "COMMIT");
    assert_eq!(statements[4], "START TRANSACTION");
    assert_eq!(statements[5], "ROLLBACK");
    assert_eq!(user.id, Some(5));
    assert_eq!(user.status(), Status::Loaded);
}

#[tokio::test]
async fn debug_toggle() {
    let mut conn = MockConnection::new();
    let mut db = Adapter::with_config(&mut conn, Config::new().debug(true));
    assert!(db.config().debug);

    db.disable_debug();
    assert!(!db.config().debug);

    db.enable_debug();
    assert!(db.config().debug);

    // Logging never changes what runs
    db.run("SELECT 1", &[]).await.unwrap();
    assert!(!Adapter::new(&mut conn).config().debug);
}

#[tokio::test]
async fn released_connection_refuses_statements() {
    let mut conn = MockConnection::new();

    Adapter::new(&mut conn).run("SELECT 1", &[]).await.unwrap();
    conn.release().await.unwrap();
    assert!(conn.is_released());

    let err = Adapter::new(&mut conn).run("SELECT 1", &[]).await.unwrap_err();
    assert_eq!(err.to_string(), "connection already released");
    assert!(conn.release().await.is_err());
}

#[tokio::test]
async fn run_returns_the_raw_response() {
    let mut conn = MockConnection::new();
    conn.respond_write(3, 0)
        .respond_rows([user_row(1, "ann", true)]);

    let mut db = Adapter::new(&mut conn);

    let response = db
        .run("UPDATE app.users SET active = ?", &[tabula::Value::I64(1)])
        .await
        .unwrap();
    assert_eq!(response.affected_rows().unwrap(), 3);
    assert_eq!(response.last_insert_id, 0);

    let response = db.run("SELECT * FROM app.users", &[]).await.unwrap();
    assert!(response.affected_rows().is_err());
    assert_eq!(response.into_rows(), [user_row(1, "ann", true)]);
}
