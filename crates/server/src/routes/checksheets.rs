use crate::{
    dtos::{
        checksheet::{
            ChecksheetResponse, DefaultChecksheetQuery, ElectiveAssignmentRequest,
            MoveCourseRequest, MoveStatusResponse, PathwayAssignmentRequest, UnassignRequest,
        },
        plan::PlanResponse,
    },
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use planner::{MoveRequest, SlotAssignment};

/// Move a course to another semester or position.
///
/// The plan is only changed when every prerequisite is met, every
/// corequisite is met and no later course depends on the one being moved.
/// A rejected move still returns 200 with `moved: false`.
#[utoipa::path(
    post,
    path = "/checksheets/move",
    request_body = MoveCourseRequest,
    responses(
        (status = 200, description = "Move evaluated", body = MoveStatusResponse),
        (status = 400, description = "Invalid request, unknown user, semester or course"),
        (status = 409, description = "Plan was modified concurrently"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Checksheets"
)]
pub async fn move_course(
    State(state): State<AppState>,
    payload: Result<Json<MoveCourseRequest>, JsonRejection>,
) -> ApiResult<Json<MoveStatusResponse>> {
    let Json(request) = payload?;
    let user_id = request.user_id.clone();

    let status = state
        .advisor
        .move_course(&user_id, &MoveRequest::from(request))
        .await?;

    Ok(Json(status.into()))
}

/// Evaluate a move without changing the plan
#[utoipa::path(
    post,
    path = "/checksheets/move/check",
    request_body = MoveCourseRequest,
    responses(
        (status = 200, description = "Move evaluated", body = MoveStatusResponse),
        (status = 400, description = "Invalid request, unknown user, semester or course"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Checksheets"
)]
pub async fn check_move(
    State(state): State<AppState>,
    payload: Result<Json<MoveCourseRequest>, JsonRejection>,
) -> ApiResult<Json<MoveStatusResponse>> {
    let Json(request) = payload?;
    let user_id = request.user_id.clone();

    let status = state
        .advisor
        .check_move(&user_id, &MoveRequest::from(request))
        .await?;

    Ok(Json(status.into()))
}

/// Fill a pathway slot with a catalog course, AP credit or transfer credit
#[utoipa::path(
    post,
    path = "/checksheets/pathway",
    request_body = PathwayAssignmentRequest,
    responses(
        (status = 200, description = "Slot filled", body = PlanResponse),
        (status = 400, description = "Invalid request, unknown slot or course does not fit"),
        (status = 409, description = "Plan was modified concurrently"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Checksheets"
)]
pub async fn assign_pathway(
    State(state): State<AppState>,
    payload: Result<Json<PathwayAssignmentRequest>, JsonRejection>,
) -> ApiResult<Json<PlanResponse>> {
    let Json(request) = payload?;
    let assignment = SlotAssignment::try_from(&request)?;

    let plan = state
        .advisor
        .assign_pathway(&request.user_id, &assignment)
        .await?;

    Ok(Json(plan.into()))
}

/// Fill an elective slot with a catalog course, AP credit or transfer credit
#[utoipa::path(
    post,
    path = "/checksheets/elective",
    request_body = ElectiveAssignmentRequest,
    responses(
        (status = 200, description = "Slot filled", body = PlanResponse),
        (status = 400, description = "Invalid request, unknown slot or course already used"),
        (status = 409, description = "Plan was modified concurrently"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Checksheets"
)]
pub async fn assign_elective(
    State(state): State<AppState>,
    payload: Result<Json<ElectiveAssignmentRequest>, JsonRejection>,
) -> ApiResult<Json<PlanResponse>> {
    let Json(request) = payload?;
    let assignment = SlotAssignment::try_from(&request)?;

    let plan = state
        .advisor
        .assign_elective(&request.user_id, &assignment)
        .await?;

    Ok(Json(plan.into()))
}

/// Undo a pathway or elective assignment and restore the placeholder
#[utoipa::path(
    post,
    path = "/checksheets/unassign",
    request_body = UnassignRequest,
    responses(
        (status = 200, description = "Slot restored", body = PlanResponse),
        (status = 400, description = "Invalid request or course fills no slot"),
        (status = 409, description = "Plan was modified concurrently"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Checksheets"
)]
pub async fn unassign_slot(
    State(state): State<AppState>,
    payload: Result<Json<UnassignRequest>, JsonRejection>,
) -> ApiResult<Json<PlanResponse>> {
    let Json(request) = payload?;

    let plan = state
        .advisor
        .unassign_slot(&request.user_id, &request.course_id)
        .await?;

    Ok(Json(plan.into()))
}

/// Get the default checksheet for a major and graduation year
#[utoipa::path(
    get,
    path = "/checksheets/default",
    params(DefaultChecksheetQuery),
    responses(
        (status = 200, description = "Checksheet found", body = ChecksheetResponse),
        (status = 400, description = "Invalid query or checksheet doesn't exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Checksheets"
)]
pub async fn default_checksheet(
    State(state): State<AppState>,
    query: Result<Query<DefaultChecksheetQuery>, QueryRejection>,
) -> ApiResult<Json<ChecksheetResponse>> {
    let Query(query) = query?;

    let template = state
        .advisor
        .default_checksheet(&query.major, query.grad_year)
        .await?;

    Ok(Json(template.into()))
}
