use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_catalog_contracts::CatalogService;

use crate::models::catalog::ApiSkills;

pub fn router(service: Arc<impl CatalogService>) -> Router<()> {
    Router::new()
        .route("/about", routing::get(get_about))
        .route("/skills", routing::get(get_skills))
        .route("/projects", routing::get(get_projects))
        .route("/experience", routing::get(get_experience))
        .with_state(service)
}

async fn get_about(service: State<Arc<impl CatalogService>>) -> Response {
    Json(service.get_about()).into_response()
}

async fn get_skills(service: State<Arc<impl CatalogService>>) -> Response {
    Json(ApiSkills(service.get_skills())).into_response()
}

async fn get_projects(service: State<Arc<impl CatalogService>>) -> Response {
    Json(service.get_projects()).into_response()
}

async fn get_experience(service: State<Arc<impl CatalogService>>) -> Response {
    Json(service.get_experience()).into_response()
}
