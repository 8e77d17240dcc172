use crate::{
    checker::MoveRequest,
    error::{PlanError, PlanResult},
};
use log::{debug, warn};
use models::plan::DegreePlan;

/// Relocates a course entry between two semesters of `plan`.
///
/// All preconditions are checked before anything is touched, so a failed
/// move leaves the plan exactly as it was. When the source semester ends up
/// with zero credits it is removed from the plan.
pub fn move_course(plan: &mut DegreePlan, request: &MoveRequest) -> PlanResult<()> {
    let MoveRequest {
        course_id,
        from_sem,
        to_sem,
        to_index,
    } = request;

    let from = plan
        .semester(*from_sem)
        .ok_or(PlanError::SemesterNotFound(*from_sem))?;

    if !from.contains(course_id) {
        return Err(PlanError::CourseNotInSemester {
            course_id: course_id.clone(),
            semester: *from_sem,
        });
    }

    let to = plan
        .semester(*to_sem)
        .ok_or(PlanError::SemesterNotFound(*to_sem))?;

    // The entry leaves the list before insertion when reordering in place
    let capacity = if from_sem == to_sem {
        to.len() - 1
    } else {
        to.len()
    };

    if let Some(index) = to_index
        && *index > capacity
    {
        return Err(PlanError::Validation(format!(
            "toIndex {index} is past the end of semester {to_sem} ({capacity} courses)"
        )));
    }

    let (_, entry) = plan
        .semester_mut(*from_sem)
        .and_then(|sem| sem.remove_course(course_id))
        .ok_or_else(|| PlanError::CourseNotInSemester {
            course_id: course_id.clone(),
            semester: *from_sem,
        })?;

    if let Some(to) = plan.semester_mut(*to_sem) {
        to.insert_course(*to_index, entry);
    }

    if let Some(index) = plan.semester_index(*from_sem)
        && plan.semesters[index].total_credits == 0
    {
        let removed = plan.semesters.remove(index);
        debug!("Removed semester {from_sem} from {} at zero credits", plan.user_id);

        if !removed.is_empty() {
            let dropped: Vec<&str> = removed
                .courses
                .iter()
                .map(|c| c.course_id.as_str())
                .collect();
            warn!(
                "Semester {from_sem} of {} still held zero-credit courses {dropped:?}",
                plan.user_id
            );
        }
    }

    Ok(())
}
