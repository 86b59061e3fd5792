use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use product_core::Product;

use crate::state::AppState;

pub async fn upsert_product(
    State(state): State<Arc<AppState>>,
    Json(mut product): Json<Product>,
) -> Json<Product> {
    state.pipeline().run(&mut product);
    Json(product)
}

// Echoes the supplied body. Products are not stored, so there is nothing to
// look up by id.
pub async fn get_product(
    Path(_product_id): Path<i64>,
    Json(product): Json<Product>,
) -> Json<Product> {
    Json(product)
}
