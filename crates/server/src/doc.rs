use crate::routes::{checksheets, courses, health, resources, users};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        users::create_user,
        users::get_checksheet,
        checksheets::move_course,
        checksheets::check_move,
        checksheets::assign_pathway,
        checksheets::assign_elective,
        checksheets::unassign_slot,
        checksheets::default_checksheet,
        courses::get_course,
        courses::get_course_by_name,
        courses::search_courses,
        courses::autocomplete_course_name,
        resources::ap_equivalents,
        resources::pathway_categories,
        resources::majors,
        resources::schools
    ),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Users", description = "Plan creation and lookup"),
        (name = "Checksheets", description = "Course moves and slot assignment"),
        (name = "Courses", description = "Catalog lookups"),
        (name = "Resources", description = "Reference lists"),
    ),
    info(
        title = "Degree Plan API",
        version = "1.0.0",
        description = "Semester-by-semester degree planning with requisite checks",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
