//! Filling pathway and elective placeholders with concrete credit.
//!
//! A slot can be filled from an unused AP equivalent, an unused transfer
//! record, or a catalog course. Equivalent credit is already counted, so it
//! only removes the placeholder; a catalog course takes the placeholder's
//! position. Each fill records the slot it replaced so it can be undone.

use crate::error::{PlanError, PlanResult};
use log::info;
use models::{
    course::Course,
    equivalent::{CreditSource, ElectiveFulfillment, PathwayFulfillment, SlotRef},
    plan::{CourseEntry, DegreePlan},
};

/// Request to replace a placeholder with a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    pub semester: u32,
    pub slot_id: String,
    pub course_id: String,
    pub source: CreditSource,
    /// Pathway category the course must carry; unused for electives
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotKind {
    Pathway,
    Elective,
}

impl SlotKind {
    fn accepts(self, entry: &CourseEntry) -> bool {
        match self {
            Self::Pathway => entry.is_pathway_slot(),
            Self::Elective => entry.is_elective_slot(),
        }
    }
}

enum Claim {
    Ap(usize),
    Transfer(usize),
    Catalog(CourseEntry),
}

/// Whether `course_id` already earns credit anywhere in the plan
pub fn is_course_used(plan: &DegreePlan, course_id: &str) -> bool {
    plan.semesters
        .iter()
        .any(|sem| sem.position(course_id).is_some())
        || plan.pathways.iter().any(|p| p.course_id == course_id)
        || plan.electives.iter().any(|e| e.course_id == course_id)
        || plan.equivalent_course_ids().contains(course_id)
}

fn locate_slot(
    plan: &DegreePlan,
    semester: u32,
    slot_id: &str,
    kind: SlotKind,
) -> PlanResult<SlotRef> {
    let not_found = || PlanError::SlotNotFound {
        slot_id: slot_id.to_string(),
        semester,
    };

    let sem = plan
        .semester(semester)
        .ok_or(PlanError::SemesterNotFound(semester))?;
    let position = sem.position(slot_id).ok_or_else(not_found)?;
    let entry = &sem.courses[position];

    if !kind.accepts(entry) {
        return Err(not_found());
    }

    Ok(SlotRef {
        slot_id: entry.course_id.clone(),
        name: entry.name.clone(),
        credits: entry.credits,
        semester,
        position,
    })
}

fn no_match(assignment: &SlotAssignment) -> PlanError {
    PlanError::NoMatchingEquivalent {
        course_id: assignment.course_id.clone(),
        credit: assignment.source,
    }
}

/// Validates the assignment fully, then swaps the placeholder out
fn fill_slot(
    plan: &mut DegreePlan,
    assignment: &SlotAssignment,
    course: Option<&Course>,
    kind: SlotKind,
) -> PlanResult<SlotRef> {
    let slot = locate_slot(plan, assignment.semester, &assignment.slot_id, kind)?;
    let course_id = assignment.course_id.as_str();

    let claim = match assignment.source {
        CreditSource::Ap => plan
            .ap_equivalents
            .iter()
            .position(|r| !r.used && r.course_id() == course_id)
            .map(Claim::Ap)
            .ok_or_else(|| no_match(assignment))?,
        CreditSource::Transfer => plan
            .transfer_courses
            .iter()
            .position(|t| !t.used && t.course_id == course_id)
            .map(Claim::Transfer)
            .ok_or_else(|| no_match(assignment))?,
        CreditSource::Catalog => {
            let course = course.ok_or_else(|| PlanError::CourseNotFound(course_id.to_string()))?;

            if kind == SlotKind::Pathway {
                let category = assignment.category.as_deref().unwrap_or_default();
                if !course.satisfies_pathway(category) {
                    return Err(PlanError::PathwayTypeMismatch {
                        course_id: course_id.to_string(),
                        category: category.to_string(),
                    });
                }
            }

            if is_course_used(plan, course_id) {
                return Err(PlanError::CourseAlreadyUsed(course_id.to_string()));
            }

            let mut entry =
                CourseEntry::new(course.id.clone(), course.name.clone(), course.credits);
            entry.pathway = kind == SlotKind::Pathway;
            entry.elective = kind == SlotKind::Elective;
            Claim::Catalog(entry)
        }
    };

    let semester = plan
        .semester_mut(slot.semester)
        .ok_or(PlanError::SemesterNotFound(slot.semester))?;
    semester.remove_course(&slot.slot_id);

    match claim {
        Claim::Ap(index) => {
            let record = &mut plan.ap_equivalents[index];
            record.used = true;
            record.pathway = kind == SlotKind::Pathway;
        }
        Claim::Transfer(index) => {
            let record = &mut plan.transfer_courses[index];
            record.used = true;
            record.pathway = kind == SlotKind::Pathway;
        }
        Claim::Catalog(entry) => semester.insert_course(Some(slot.position), entry),
    }

    Ok(slot)
}

/// Replaces a pathway placeholder with a course carrying `assignment.category`
pub fn assign_pathway(
    plan: &mut DegreePlan,
    assignment: &SlotAssignment,
    course: Option<&Course>,
) -> PlanResult<()> {
    let category = assignment
        .category
        .clone()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| PlanError::Validation("category is required".to_string()))?;

    let slot = fill_slot(plan, assignment, course, SlotKind::Pathway)?;

    info!(
        "Filled {} in semester {} of {} with {} ({})",
        slot.slot_id, slot.semester, plan.user_id, assignment.course_id, assignment.source
    );

    plan.pathways.push(PathwayFulfillment {
        course_id: assignment.course_id.clone(),
        category,
        completed: assignment.source != CreditSource::Catalog,
        source: Some(assignment.source),
        slot: Some(slot),
    });

    Ok(())
}

/// Replaces an elective placeholder with any course
pub fn assign_elective(
    plan: &mut DegreePlan,
    assignment: &SlotAssignment,
    course: Option<&Course>,
) -> PlanResult<()> {
    let slot = fill_slot(plan, assignment, course, SlotKind::Elective)?;

    info!(
        "Filled {} in semester {} of {} with {} ({})",
        slot.slot_id, slot.semester, plan.user_id, assignment.course_id, assignment.source
    );

    plan.electives.push(ElectiveFulfillment {
        course_id: assignment.course_id.clone(),
        source: assignment.source,
        slot,
    });

    Ok(())
}

/// Undoes a pathway or elective assignment, restoring the placeholder
pub fn unassign_slot(plan: &mut DegreePlan, course_id: &str) -> PlanResult<()> {
    let pathway = plan
        .pathways
        .iter()
        .enumerate()
        .filter(|(_, p)| p.course_id == course_id)
        .find_map(|(index, p)| Some((SlotKind::Pathway, index, p.slot.clone()?, p.source?)));

    let (kind, index, slot, source) = pathway
        .or_else(|| {
            plan.electives
                .iter()
                .enumerate()
                .find(|(_, e)| e.course_id == course_id)
                .map(|(index, e)| (SlotKind::Elective, index, e.slot.clone(), e.source))
        })
        .ok_or_else(|| {
            PlanError::Validation(format!(
                "Course {course_id} doesn't fill a pathway or elective slot"
            ))
        })?;

    if plan.semester(slot.semester).is_none() {
        return Err(PlanError::SemesterNotFound(slot.semester));
    }

    match kind {
        SlotKind::Pathway => {
            plan.pathways.remove(index);
        }
        SlotKind::Elective => {
            plan.electives.remove(index);
        }
    }

    // The most recently claimed record is released first
    match source {
        CreditSource::Ap => {
            if let Some(record) = plan
                .ap_equivalents
                .iter_mut()
                .rev()
                .find(|r| r.used && r.course_id() == course_id)
            {
                record.used = false;
                record.pathway = false;
            }
        }
        CreditSource::Transfer => {
            if let Some(record) = plan
                .transfer_courses
                .iter_mut()
                .rev()
                .find(|t| t.used && t.course_id == course_id)
            {
                record.used = false;
                record.pathway = false;
            }
        }
        CreditSource::Catalog => {
            if let Some(semester) = plan
                .semesters
                .iter_mut()
                .find(|sem| sem.position(course_id).is_some())
            {
                semester.remove_course(course_id);
            }
        }
    }

    let mut placeholder = CourseEntry::new(slot.slot_id.clone(), slot.name.clone(), slot.credits);
    placeholder.pathway = kind == SlotKind::Pathway;
    placeholder.elective = kind == SlotKind::Elective;

    plan.semester_mut(slot.semester)
        .ok_or(PlanError::SemesterNotFound(slot.semester))?
        .insert_course(Some(slot.position), placeholder);

    info!(
        "Restored {} in semester {} of {}",
        slot.slot_id, slot.semester, plan.user_id
    );

    Ok(())
}
