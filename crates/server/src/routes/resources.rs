use crate::{
    dtos::resources::{ApEquivalentResponse, MajorResponse, PathwayCategoryResponse},
    error::ApiResult,
    state::AppState,
};
use axum::{Json, extract::State};

/// List AP exams and the courses they grant
#[utoipa::path(
    get,
    path = "/resources/ap-equivalents",
    responses(
        (status = 200, description = "AP equivalents", body = [ApEquivalentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Resources"
)]
pub async fn ap_equivalents(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ApEquivalentResponse>>> {
    let equivalents = state.advisor.ap_equivalents().await?;

    Ok(Json(equivalents.into_iter().map(Into::into).collect()))
}

/// List pathway categories
#[utoipa::path(
    get,
    path = "/resources/pathways",
    responses(
        (status = 200, description = "Pathway categories", body = [PathwayCategoryResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Resources"
)]
pub async fn pathway_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PathwayCategoryResponse>>> {
    let categories = state.advisor.pathway_categories().await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// List supported majors
#[utoipa::path(
    get,
    path = "/resources/majors",
    responses(
        (status = 200, description = "Majors with a checksheet", body = [MajorResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Resources"
)]
pub async fn majors(State(state): State<AppState>) -> ApiResult<Json<Vec<MajorResponse>>> {
    let majors = state.advisor.majors().await?;

    Ok(Json(majors.into_iter().map(Into::into).collect()))
}

/// List schools offering at least one major
#[utoipa::path(
    get,
    path = "/resources/schools",
    responses(
        (status = 200, description = "School names", body = [String]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Resources"
)]
pub async fn schools(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.advisor.schools().await?))
}
