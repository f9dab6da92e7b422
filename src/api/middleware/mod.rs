pub mod session_auth;
pub mod tracing;
