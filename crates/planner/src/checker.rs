//! Decides whether a course can move to another semester.
//!
//! Semesters are walked in order up to the destination. A prerequisite
//! counts only when it is scheduled strictly before the destination, a
//! corequisite counts when it is scheduled in the destination or earlier,
//! and consumed AP/transfer credit counts regardless of semester. Courses
//! scheduled after the original position that name the moving course in
//! their own requisites block the move.

use crate::{
    error::{PlanError, PlanResult},
    store::CourseCatalog,
};
use log::{debug, warn};
use models::{course::is_placeholder_id, plan::DegreePlan, requisite::Requisites};
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of evaluating a move
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveStatus {
    pub prerequisites_met: bool,
    pub corequisites_met: bool,
    pub has_dependents: bool,
    /// Prerequisite groups still unsatisfied at the destination
    pub unmet_prereqs: Requisites,
    /// Corequisite groups still unsatisfied at the destination
    pub unmet_coreqs: Requisites,
    /// Later courses that list the moving course as a requisite
    pub dependent_course_ids: Vec<String>,
    /// Whether the plan was changed
    pub moved: bool,
}

impl MoveStatus {
    /// Status for a move with nothing to check
    pub fn unconstrained() -> Self {
        Self {
            prerequisites_met: true,
            corequisites_met: true,
            ..Self::default()
        }
    }

    pub fn is_permitted(&self) -> bool {
        self.prerequisites_met && self.corequisites_met && !self.has_dependents
    }
}

/// A validated move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub course_id: String,
    pub from_sem: u32,
    pub to_sem: u32,
    pub to_index: Option<usize>,
}

/// Evaluates `request` against `plan` without modifying it
pub async fn check_move<C>(
    plan: &DegreePlan,
    catalog: &C,
    request: &MoveRequest,
) -> PlanResult<MoveStatus>
where
    C: CourseCatalog + ?Sized,
{
    let course_id = request.course_id.as_str();

    let from = plan
        .semester(request.from_sem)
        .ok_or(PlanError::SemesterNotFound(request.from_sem))?;

    if !from.contains(course_id) {
        return Err(PlanError::CourseNotInSemester {
            course_id: course_id.to_string(),
            semester: request.from_sem,
        });
    }

    if plan.semester(request.to_sem).is_none() {
        return Err(PlanError::SemesterNotFound(request.to_sem));
    }

    // Pathway and elective slots carry no requisites
    if is_placeholder_id(course_id) {
        return Ok(MoveStatus::unconstrained());
    }

    let course = catalog
        .get(course_id)
        .await?
        .ok_or_else(|| PlanError::CourseNotFound(course_id.to_string()))?;

    let equivalents = plan.equivalent_course_ids();
    let mut prerequisites = course.prerequisites.without_satisfied(&equivalents);
    let mut corequisites = course.corequisites.without_satisfied(&equivalents);
    let mut dependents = Vec::new();

    for semester in plan
        .semesters
        .iter()
        .filter(|sem| sem.number <= request.to_sem)
    {
        let scheduled: HashSet<&str> = semester
            .course_references
            .iter()
            .map(String::as_str)
            .filter(|id| *id != course_id)
            .collect();

        if semester.number != request.to_sem {
            prerequisites = prerequisites.without_satisfied(&scheduled);
        }
        corequisites = corequisites.without_satisfied(&scheduled);

        debug!(
            "Semester {}: {} prerequisite and {} corequisite groups outstanding for {course_id}",
            semester.number,
            prerequisites.len(),
            corequisites.len()
        );

        if semester.number <= request.from_sem {
            continue;
        }

        for scheduled_id in &semester.course_references {
            if scheduled_id == course_id || is_placeholder_id(scheduled_id) {
                continue;
            }

            match catalog.get(scheduled_id).await? {
                Some(later) if later.depends_on(course_id) => {
                    dependents.push(scheduled_id.clone());
                }
                Some(_) => {}
                None => warn!("Scheduled course {scheduled_id} is missing from the catalog"),
            }
        }
    }

    Ok(MoveStatus {
        prerequisites_met: prerequisites.is_empty(),
        corequisites_met: corequisites.is_empty(),
        has_dependents: !dependents.is_empty(),
        unmet_prereqs: prerequisites,
        unmet_coreqs: corequisites,
        dependent_course_ids: dependents,
        moved: false,
    })
}
