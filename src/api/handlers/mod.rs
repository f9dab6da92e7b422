pub mod health;
pub mod login;
pub mod logout;
pub mod me;

pub use health::health_handler;
pub use login::login_handler;
pub use logout::logout_handler;
pub use me::me_handler;
