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

#[sqlx::test]
async fn test_login_missing_fields(pool: PgPool) {
    let server = test_server(pool);

    let response = server.post("/login").form(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("Invalid input");
}

#[sqlx::test]
async fn test_login_blank_username(pool: PgPool) {
    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "", "password": "secret"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("Invalid input");
}

#[sqlx::test]
async fn test_login_whitespace_only_password(pool: PgPool) {
    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "alice", "password": "   "}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("Invalid input");
}

#[sqlx::test]
async fn test_login_unknown_username(pool: PgPool) {
    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "nobody", "password": "whatever"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text("Invalid credentials");
}

#[sqlx::test]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "alice", "password": "wrong-password"}))
        .await;

    // Same response as an unknown username, on purpose
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text("Invalid credentials");
}

#[sqlx::test]
async fn test_login_success_sets_session(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "alice", "password": "correct-password"}))
        .await;

    response.assert_status_ok();
    response.assert_text("Logged in successfully");

    // The session now identifies the user
    let me = server.get("/me").await;
    me.assert_status_ok();

    let body = me.json::<serde_json::Value>();
    assert_eq!(body["id"], user_id);
    assert_eq!(body["username"], "alice");
}

#[sqlx::test]
async fn test_login_is_repeatable(pool: PgPool) {
    common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool);

    for _ in 0..2 {
        let response = server
            .post("/login")
            .form(&json!({"username": "alice", "password": "correct-password"}))
            .await;

        response.assert_status_ok();
        response.assert_text("Logged in successfully");
    }
}

#[sqlx::test]
async fn test_failed_login_leaves_session_unauthenticated(pool: PgPool) {
    common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "alice", "password": "wrong-password"}))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let me = server.get("/me").await;
    me.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_login_sql_metacharacters_treated_as_data(pool: PgPool) {
    common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "' OR '1'='1", "password": "anything"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text("Invalid credentials");
}

#[sqlx::test]
async fn test_login_username_is_case_sensitive(pool: PgPool) {
    common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "Alice", "password": "correct-password"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_login_trims_surrounding_whitespace(pool: PgPool) {
    common::create_test_user(&pool, "alice", "correct-password").await;

    let server = test_server(pool);

    let response = server
        .post("/login")
        .form(&json!({"username": "  alice  ", "password": "  correct-password  "}))
        .await;

    response.assert_status_ok();
}
