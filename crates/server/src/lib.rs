pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use crate::{
    doc::ApiDoc,
    routes::{checksheets, courses, health, resources, users},
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

/// Builds the full router, including the OpenAPI document and Swagger UI
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/users", post(users::create_user))
        .route("/users/{user_id}/checksheet", get(users::get_checksheet))
        .route("/checksheets/move", post(checksheets::move_course))
        .route("/checksheets/move/check", post(checksheets::check_move))
        .route("/checksheets/pathway", post(checksheets::assign_pathway))
        .route("/checksheets/elective", post(checksheets::assign_elective))
        .route("/checksheets/unassign", post(checksheets::unassign_slot))
        .route("/checksheets/default", get(checksheets::default_checksheet))
        .route("/courses/search", get(courses::search_courses))
        .route("/courses/autocomplete", get(courses::autocomplete_course_name))
        .route("/courses/by-name/{name}", get(courses::get_course_by_name))
        .route("/courses/{course_id}", get(courses::get_course))
        .route("/resources/ap-equivalents", get(resources::ap_equivalents))
        .route("/resources/pathways", get(resources::pathway_categories))
        .route("/resources/majors", get(resources::majors))
        .route("/resources/schools", get(resources::schools))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
}
