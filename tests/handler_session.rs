mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

fn test_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = common::create_test_app(state);

    TestServer::builder().save_cookies().build(app).unwrap()
}

async fn login(server: &TestServer, username: &str, password: &str) {
    server
        .post("/login")
        .form(&json!({"username": username, "password": password}))
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_me_requires_session(pool: PgPool) {
    let server = test_server(pool);

    let response = server.get("/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_logout_destroys_session(pool: PgPool) {
    common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool);

    login(&server, "alice", "correct-password").await;
    server.get("/me").await.assert_status_ok();

    let response = server.post("/logout").await;
    response.assert_status_ok();
    response.assert_text("Logged out");

    server.get("/me").await.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_logout_without_session_is_ok(pool: PgPool) {
    let server = test_server(pool);

    let response = server.post("/logout").await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_relogin_overwrites_session_user(pool: PgPool) {
    common::create_test_user(&pool, "alice", "alice-password").await;
    let bob_id = common::create_test_user(&pool, "bob", "bob-password").await;

    let server = test_server(pool);

    login(&server, "alice", "alice-password").await;
    login(&server, "bob", "bob-password").await;

    // The session holds one user id; the second login replaced the first
    let me = server.get("/me").await;
    me.assert_status_ok();

    let body = me.json::<serde_json::Value>();
    assert_eq!(body["id"], bob_id);
    assert_eq!(body["username"], "bob");
}

#[sqlx::test]
async fn test_me_for_deleted_user(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool.clone());

    login(&server, "alice", "correct-password").await;

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = server.get("/me").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
