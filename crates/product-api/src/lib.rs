pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/product-processor/product", post(routes::upsert_product))
        .route("/product-processor/product/{id}", get(routes::get_product))
        .with_state(state)
}
