#![allow(dead_code)]

use axum::{Router, middleware};
use sqlx::PgPool;
use std::sync::Arc;
use tower_sessions::{MemoryStore, SessionManagerLayer, cookie::Key};

use auth_service::api::middleware::session_auth;
use auth_service::api::routes::{protected_routes, public_routes};
use auth_service::application::services::AuthService;
use auth_service::infrastructure::persistence::PgUserRepository;
use auth_service::state::AppState;
use auth_service::utils::password;

pub async fn create_test_user(pool: &PgPool, username: &str, password: &str) -> i64 {
    let password_hash = password::hash_password(password).unwrap();

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let auth_service = Arc::new(AuthService::new(user_repo));

    AppState {
        auth_service,
        db: pool,
    }
}

/// Builds the full route tree on an in-memory session store, mirroring the
/// production router minus path normalization.
pub fn create_test_app(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_signed(Key::generate())
        .with_secure(false);

    let protected = protected_routes().route_layer(middleware::from_fn(session_auth::layer));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .layer(session_layer)
        .with_state(state)
}
