pub mod me;
pub mod register;
pub mod token;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::middleware::require_login;

pub fn routes() -> Router {
    let session = Router::new()
        .route("/auth/me", get(me::me))
        .route_layer(from_fn(require_login));

    Router::new()
        .route("/auth/token", post(token::token))
        .route("/auth/register", post(register::register))
        .merge(session)
}
