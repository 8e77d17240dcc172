use crate::{
    dtos::course::{CourseNameQuery, CourseResponse, CourseSearchQuery},
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use models::course::Course;

fn responses(courses: Vec<Course>) -> Json<Vec<CourseResponse>> {
    Json(courses.into_iter().map(Into::into).collect())
}

/// Get a catalog course by id
#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course id such as CS-2114")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 400, description = "Course doesn't exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> ApiResult<Json<CourseResponse>> {
    let course = state.advisor.course(&course_id).await?;

    Ok(Json(course.into()))
}

/// Get a catalog course by its exact title
#[utoipa::path(
    get,
    path = "/courses/by-name/{name}",
    params(
        ("name" = String, Path, description = "Course title")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 400, description = "Course doesn't exist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<CourseResponse>> {
    let course = state.advisor.course_by_name(&name).await?;

    Ok(Json(course.into()))
}

/// Autocomplete courses by category prefix, or by number prefix within a category
#[utoipa::path(
    get,
    path = "/courses/search",
    params(CourseSearchQuery),
    responses(
        (status = 200, description = "Matching courses", body = [CourseResponse]),
        (status = 400, description = "Category not provided"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn search_courses(
    State(state): State<AppState>,
    query: Result<Query<CourseSearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let Query(query) = query?;

    let courses = state
        .advisor
        .search_courses(&query.category, query.number.as_deref())
        .await?;

    Ok(responses(courses))
}

/// Autocomplete courses by title prefix
#[utoipa::path(
    get,
    path = "/courses/autocomplete",
    params(CourseNameQuery),
    responses(
        (status = 200, description = "Matching courses", body = [CourseResponse]),
        (status = 400, description = "Name not provided"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn autocomplete_course_name(
    State(state): State<AppState>,
    query: Result<Query<CourseNameQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let Query(query) = query?;

    let courses = state.advisor.autocomplete_course_name(&query.name).await?;

    Ok(responses(courses))
}
