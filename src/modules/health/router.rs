use axum::{Router, routing::any};

use crate::state::AppState;

use super::controller::hello;

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/foo", any(hello))
}
