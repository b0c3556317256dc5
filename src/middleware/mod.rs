pub mod auth;

pub use auth::{identify, require_admin, require_admin_or_self, require_login, Principal};
