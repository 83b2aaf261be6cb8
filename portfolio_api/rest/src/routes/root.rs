use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_catalog_contracts::CatalogService;

use crate::models::catalog::ApiIndex;

pub const ENDPOINTS: &[&str] = &[
    "/about",
    "/skills",
    "/projects",
    "/experience",
    "/contact (POST)",
];

pub fn router(service: Arc<impl CatalogService>) -> Router<()> {
    Router::new()
        .route("/", routing::get(index))
        .with_state(service)
}

async fn index(service: State<Arc<impl CatalogService>>) -> Response {
    let name = service.get_about().name;
    Json(ApiIndex {
        endpoints: ENDPOINTS,
        message: format!("Welcome to {name}'s portfolio API."),
    })
    .into_response()
}
