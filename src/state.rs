use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::AuthService;
use crate::infrastructure::persistence::PgUserRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub db: Arc<PgPool>,
}
