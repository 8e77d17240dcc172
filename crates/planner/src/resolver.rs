//! Applies AP exam and transfer credit to a freshly created plan.
//!
//! Transfer credit is resolved before AP credit. A course removed by either
//! source is gone from the plan, so a later record mapping to the same course
//! finds nothing and is kept unused rather than consuming a second slot.

use log::{debug, info};
use models::{
    equivalent::{ApEquivalent, ApEquivalentRecord, TransferCourse},
    plan::{CourseEntry, DegreePlan},
};

/// Removes `course_id` from the first semester holding it
fn take_course(plan: &mut DegreePlan, course_id: &str) -> Option<CourseEntry> {
    plan.semesters
        .iter_mut()
        .find(|sem| sem.contains(course_id))
        .and_then(|sem| sem.remove_course(course_id))
        .map(|(_, mut entry)| {
            entry.completed = true;
            entry.used = true;
            entry
        })
}

/// Records transfer credit, removing each credited course from the plan
pub fn apply_transfer_credits(plan: &mut DegreePlan, transfers: Vec<TransferCourse>) {
    for mut transfer in transfers {
        if plan
            .transfer_courses
            .iter()
            .any(|t| t.course_id == transfer.course_id)
        {
            debug!("Skipping duplicate transfer credit {}", transfer.course_id);
            continue;
        }

        if let Some(entry) = take_course(plan, &transfer.course_id) {
            transfer.used = true;
            transfer.pathway = entry.pathway;
            transfer.credits = entry.credits;
        }

        plan.transfer_courses.push(transfer);
    }
}

/// Records AP equivalents, removing each credited course from the plan
pub fn apply_ap_equivalents(plan: &mut DegreePlan, equivalents: Vec<ApEquivalent>) {
    for equivalent in equivalents {
        let mut record = ApEquivalentRecord::new(equivalent);

        if let Some(entry) = take_course(plan, &record.equivalent.course_id) {
            record.used = true;
            record.pathway = entry.pathway;
        }

        plan.ap_equivalents.push(record);
    }
}

/// Applies both sources in order, then resets pathway progress
pub fn resolve_equivalents(
    plan: &mut DegreePlan,
    transfers: Vec<TransferCourse>,
    equivalents: Vec<ApEquivalent>,
) {
    apply_transfer_credits(plan, transfers);
    apply_ap_equivalents(plan, equivalents);

    for pathway in &mut plan.pathways {
        pathway.completed = false;
    }

    info!(
        "Resolved equivalents for {}: {} transfer, {} AP",
        plan.user_id,
        plan.transfer_courses.iter().filter(|t| t.used).count(),
        plan.ap_equivalents.iter().filter(|r| r.used).count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ap, sample_plan, transfer};

    #[test]
    fn test_transfer_removes_course_and_credits() {
        let mut plan = sample_plan();
        let before = plan.semester(1).unwrap().total_credits;

        apply_transfer_credits(&mut plan, vec![transfer("MATH-1225", 4)]);

        let semester = plan.semester(1).unwrap();
        assert!(!semester.contains("MATH-1225"));
        assert_eq!(semester.total_credits, before - 4);
        assert_eq!(plan.transfer_courses.len(), 1);
        assert!(plan.transfer_courses[0].used);
        assert!(plan.verify().is_ok());
    }

    #[test]
    fn test_transfer_not_on_plan_is_kept_unused() {
        let mut plan = sample_plan();

        apply_transfer_credits(&mut plan, vec![transfer("ENGL-1105", 3)]);

        assert_eq!(plan.transfer_courses.len(), 1);
        assert!(!plan.transfer_courses[0].used);
    }

    #[test]
    fn test_duplicate_transfer_recorded_once() {
        let mut plan = sample_plan();

        apply_transfer_credits(
            &mut plan,
            vec![transfer("MATH-1225", 4), transfer("MATH-1225", 4)],
        );

        assert_eq!(plan.transfer_courses.len(), 1);
    }

    #[test]
    fn test_ap_removes_course_and_copies_pathway_flag() {
        let mut plan = sample_plan();

        apply_ap_equivalents(&mut plan, vec![ap(3, "MATH-1225")]);

        let record = &plan.ap_equivalents[0];
        assert!(record.used);
        assert!(record.pathway);
        assert!(plan.find_course("MATH-1225").is_none());
        assert!(plan.verify().is_ok());
    }

    #[test]
    fn test_ap_not_on_plan_is_recorded_unused() {
        let mut plan = sample_plan();

        apply_ap_equivalents(&mut plan, vec![ap(9, "PSYC-1004")]);

        assert_eq!(plan.ap_equivalents.len(), 1);
        assert!(!plan.ap_equivalents[0].used);
    }

    #[test]
    fn test_transfer_takes_priority_over_ap() {
        let mut plan = sample_plan();
        let before = plan.scheduled_credits();

        resolve_equivalents(
            &mut plan,
            vec![transfer("CS-1114", 3)],
            vec![ap(1, "CS-1114")],
        );

        assert!(plan.transfer_courses[0].used);
        assert!(!plan.ap_equivalents[0].used);
        // Only one slot was consumed
        assert_eq!(plan.scheduled_credits(), before - 3);
    }

    #[test]
    fn test_two_ap_records_for_one_course() {
        let mut plan = sample_plan();

        apply_ap_equivalents(&mut plan, vec![ap(1, "CS-1114"), ap(2, "CS-1114")]);

        assert!(plan.ap_equivalents[0].used);
        assert!(!plan.ap_equivalents[1].used);
    }

    #[test]
    fn test_pathway_progress_reset() {
        let mut plan = sample_plan();
        for pathway in &mut plan.pathways {
            pathway.completed = true;
        }

        resolve_equivalents(&mut plan, vec![], vec![]);

        assert!(plan.pathways.iter().all(|p| !p.completed));
    }
}
