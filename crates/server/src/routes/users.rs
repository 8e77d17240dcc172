use crate::{
    dtos::{plan::PlanResponse, user::CreateUserRequest},
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// Create a user's plan from the default checksheet for their major and
/// graduation year, applying AP and transfer credit
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Plan created", body = PlanResponse),
        (status = 400, description = "Invalid request, unknown checksheet or user already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<Json<PlanResponse>> {
    let Json(request) = payload?;

    let plan = state.advisor.create_plan(request.into()).await?;

    Ok(Json(plan.into()))
}

/// Get a user's plan
#[utoipa::path(
    get,
    path = "/users/{user_id}/checksheet",
    params(
        ("user_id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Plan found", body = PlanResponse),
        (status = 400, description = "User doesn't exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_checksheet(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<PlanResponse>> {
    let plan = state.advisor.plan(&user_id).await?;

    Ok(Json(plan.into()))
}
