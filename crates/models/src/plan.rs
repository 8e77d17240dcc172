use crate::{
    checksheet::{ChecksheetTemplate, TemplateEntry},
    course::{ELECTIVE_MARKER, PATHWAY_MARKER},
    equivalent::{ApEquivalentRecord, ElectiveFulfillment, PathwayFulfillment, TransferCourse},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// A structural inconsistency found by [`DegreePlan::verify`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("semester {semester} totals {recorded} credits but its courses sum to {actual}")]
    CreditMismatch {
        semester: u32,
        recorded: u32,
        actual: u32,
    },

    #[error("semester {semester} course references do not match its courses")]
    StaleReferences { semester: u32 },

    #[error("course {course_id} is placed in more than one semester")]
    DuplicatePlacement { course_id: String },

    #[error("semester {semester} appears more than once or out of order")]
    SemesterOrder { semester: u32 },
}

/// A course placed in a student's plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEntry {
    pub course_id: String,
    pub name: String,
    pub credits: u32,
    pub completed: bool,
    /// Counts toward a pathway requirement
    pub pathway: bool,
    pub elective: bool,
    /// Consumed by an AP or transfer equivalent
    #[serde(default)]
    pub used: bool,
}

impl CourseEntry {
    pub fn new(course_id: String, name: String, credits: u32) -> Self {
        Self {
            course_id,
            name,
            credits,
            completed: false,
            pathway: false,
            elective: false,
            used: false,
        }
    }

    /// A pathway placeholder such as "Pathway 2"
    pub fn is_pathway_slot(&self) -> bool {
        self.course_id.contains(PATHWAY_MARKER)
    }

    /// An elective placeholder
    pub fn is_elective_slot(&self) -> bool {
        self.elective || self.course_id.contains(ELECTIVE_MARKER)
    }

    pub fn is_placeholder(&self) -> bool {
        self.is_pathway_slot() || self.is_elective_slot()
    }
}

/// One semester of a student's plan.
///
/// `total_credits` and `course_references` are maintained by the mutators
/// below; writing to `courses` directly requires a call to [`Semester::reindex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    /// 1-based semester number
    pub number: u32,
    pub total_credits: u32,
    pub courses: Vec<CourseEntry>,
    /// Identifiers of the courses currently placed in this semester
    #[serde(default)]
    pub course_references: Vec<String>,
}

impl Semester {
    pub fn new(number: u32, courses: Vec<CourseEntry>) -> Self {
        let mut semester = Self {
            number,
            total_credits: 0,
            courses,
            course_references: Vec::new(),
        };
        semester.reindex();
        semester
    }

    /// Recomputes the credit total and reference index from `courses`
    pub fn reindex(&mut self) {
        self.total_credits = self.courses.iter().map(|c| c.credits).sum();
        self.course_references = self
            .courses
            .iter()
            .filter(|c| !c.used)
            .map(|c| c.course_id.clone())
            .collect();
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.course_references.iter().any(|id| id == course_id)
    }

    pub fn position(&self, course_id: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.course_id == course_id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Removes the entry with `course_id`, returning it and its former position
    pub fn remove_course(&mut self, course_id: &str) -> Option<(usize, CourseEntry)> {
        let index = self.position(course_id)?;
        let entry = self.courses.remove(index);

        self.total_credits -= entry.credits;
        // Placeholders may repeat, so only one reference goes with the entry
        if !entry.used
            && let Some(reference) = self.course_references.iter().position(|id| id == course_id)
        {
            self.course_references.remove(reference);
        }

        Some((index, entry))
    }

    /// Inserts at `index`, or appends when `index` is `None` or past the end
    pub fn insert_course(&mut self, index: Option<usize>, entry: CourseEntry) {
        let index = index.unwrap_or(self.courses.len()).min(self.courses.len());

        self.total_credits += entry.credits;
        if !entry.used {
            self.course_references.push(entry.course_id.clone());
        }
        self.courses.insert(index, entry);
    }

    fn verify(&self) -> Result<(), InvariantViolation> {
        let actual: u32 = self.courses.iter().map(|c| c.credits).sum();
        if actual != self.total_credits {
            return Err(InvariantViolation::CreditMismatch {
                semester: self.number,
                recorded: self.total_credits,
                actual,
            });
        }

        let mut expected: Vec<&str> = self
            .courses
            .iter()
            .filter(|c| !c.used)
            .map(|c| c.course_id.as_str())
            .collect();
        let mut recorded: Vec<&str> = self.course_references.iter().map(String::as_str).collect();
        expected.sort_unstable();
        recorded.sort_unstable();

        if expected != recorded {
            return Err(InvariantViolation::StaleReferences {
                semester: self.number,
            });
        }

        Ok(())
    }
}

/// A student's personalized degree plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreePlan {
    pub user_id: String,
    pub checksheet_id: String,
    pub major: String,
    pub year: u16,
    /// Credits required to graduate
    pub total_credits: u32,
    /// Incremented by the plan store on every successful write
    #[serde(default)]
    pub revision: u64,
    /// Ordered by semester number
    pub semesters: Vec<Semester>,
    #[serde(default)]
    pub ap_equivalents: Vec<ApEquivalentRecord>,
    #[serde(default)]
    pub transfer_courses: Vec<TransferCourse>,
    #[serde(default)]
    pub pathways: Vec<PathwayFulfillment>,
    #[serde(default)]
    pub electives: Vec<ElectiveFulfillment>,
    /// Courses counting toward a pathway, for membership tests
    #[serde(default)]
    pub pathway_ids: BTreeSet<String>,
}

impl DegreePlan {
    /// Instantiates a fresh plan for `user_id` from a checksheet
    pub fn from_template(template: &ChecksheetTemplate, user_id: &str) -> Self {
        let pathway_ids: BTreeSet<String> = template.pathway_ids.iter().cloned().collect();

        let to_entry = |entry: &TemplateEntry| CourseEntry {
            course_id: entry.course_id.clone(),
            name: entry.name.clone(),
            credits: entry.credits,
            completed: false,
            pathway: entry.course_id.contains(PATHWAY_MARKER)
                || pathway_ids.contains(&entry.course_id),
            elective: entry.elective || entry.course_id.contains(ELECTIVE_MARKER),
            used: false,
        };

        let mut semesters: Vec<Semester> = template
            .semesters
            .iter()
            .map(|sem| Semester::new(sem.number, sem.courses.iter().map(to_entry).collect()))
            .collect();
        semesters.sort_by_key(|sem| sem.number);

        let pathways = template
            .pathways
            .iter()
            .map(|p| PathwayFulfillment {
                course_id: p.course_id.clone(),
                category: p.category.clone(),
                completed: false,
                source: None,
                slot: None,
            })
            .collect();

        Self {
            user_id: user_id.to_string(),
            checksheet_id: template.id(),
            major: template.major.clone(),
            year: template.year,
            total_credits: template.total_credits,
            revision: 0,
            semesters,
            ap_equivalents: Vec::new(),
            transfer_courses: Vec::new(),
            pathways,
            electives: Vec::new(),
            pathway_ids,
        }
    }

    pub fn semester(&self, number: u32) -> Option<&Semester> {
        self.semesters.iter().find(|sem| sem.number == number)
    }

    pub fn semester_mut(&mut self, number: u32) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|sem| sem.number == number)
    }

    pub fn semester_index(&self, number: u32) -> Option<usize> {
        self.semesters.iter().position(|sem| sem.number == number)
    }

    /// The first semester currently holding `course_id`
    pub fn find_course(&self, course_id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|sem| sem.contains(course_id))
    }

    /// Course identifiers credited by consumed AP and transfer records
    pub fn equivalent_course_ids(&self) -> HashSet<&str> {
        self.ap_equivalents
            .iter()
            .filter(|r| r.used)
            .map(|r| r.course_id())
            .chain(
                self.transfer_courses
                    .iter()
                    .filter(|t| t.used)
                    .map(|t| t.course_id.as_str()),
            )
            .collect()
    }

    /// Sum of credits currently scheduled across all semesters
    pub fn scheduled_credits(&self) -> u32 {
        self.semesters.iter().map(|sem| sem.total_credits).sum()
    }

    /// Checks every structural invariant of the plan
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::new();
        let mut last = None;

        for semester in &self.semesters {
            if last.is_some_and(|prev| prev >= semester.number) {
                return Err(InvariantViolation::SemesterOrder {
                    semester: semester.number,
                });
            }
            last = Some(semester.number);

            semester.verify()?;

            for entry in semester.courses.iter().filter(|c| !c.is_placeholder()) {
                if !seen.insert(entry.course_id.as_str()) {
                    return Err(InvariantViolation::DuplicatePlacement {
                        course_id: entry.course_id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksheet::{PathwayCourse, SemesterTemplate};

    fn entry(id: &str, credits: u32) -> TemplateEntry {
        TemplateEntry {
            course_id: id.to_string(),
            name: id.to_string(),
            credits,
            elective: false,
        }
    }

    fn template() -> ChecksheetTemplate {
        ChecksheetTemplate {
            major: "CS".to_string(),
            major_name: "Computer Science".to_string(),
            year: 2022,
            school: "College of Engineering".to_string(),
            total_credits: 120,
            semesters: vec![
                SemesterTemplate {
                    number: 2,
                    total_credits: 6,
                    courses: vec![entry("CS-2114", 3), entry("Pathway 0", 3)],
                },
                SemesterTemplate {
                    number: 1,
                    total_credits: 7,
                    courses: vec![entry("CS-1114", 3), entry("MATH-1225", 4)],
                },
            ],
            pathway_ids: vec!["MATH-1225".to_string()],
            pathways: vec![PathwayCourse {
                course_id: "MATH-1225".to_string(),
                name: "Calculus I".to_string(),
                category: "5f".to_string(),
            }],
        }
    }

    #[test]
    fn test_from_template() {
        let plan = DegreePlan::from_template(&template(), "hokie1");

        assert_eq!(plan.user_id, "hokie1");
        assert_eq!(plan.checksheet_id, "CS-2022");
        assert_eq!(
            plan.semesters.iter().map(|s| s.number).collect::<Vec<_>>(),
            [1, 2]
        );

        let first = plan.semester(1).unwrap();
        assert_eq!(first.total_credits, 7);
        assert_eq!(first.course_references, ["CS-1114", "MATH-1225"]);
        assert!(first.courses[1].pathway);
        assert!(!first.courses[0].pathway);
        assert!(first.courses.iter().all(|c| !c.completed));

        let second = plan.semester(2).unwrap();
        assert!(second.courses[1].pathway);
        assert!(second.courses[1].is_pathway_slot());

        assert_eq!(plan.pathways.len(), 1);
        assert!(!plan.pathways[0].completed);
        assert!(plan.verify().is_ok());
    }

    #[test]
    fn test_remove_and_insert_keep_totals() {
        let mut plan = DegreePlan::from_template(&template(), "hokie1");
        let semester = plan.semester_mut(1).unwrap();

        let (index, removed) = semester.remove_course("CS-1114").unwrap();
        assert_eq!(index, 0);
        assert_eq!(semester.total_credits, 4);
        assert!(!semester.contains("CS-1114"));

        semester.insert_course(Some(1), removed);
        assert_eq!(semester.total_credits, 7);
        assert_eq!(semester.courses[1].course_id, "CS-1114");
        assert!(plan.verify().is_ok());
    }

    #[test]
    fn test_remove_one_of_repeated_placeholders() {
        let mut semester = Semester::new(
            3,
            vec![
                CourseEntry::new("Free Elective".into(), "Free Elective".into(), 3),
                CourseEntry::new("Free Elective".into(), "Free Elective".into(), 3),
                CourseEntry::new("CS-2505".into(), "CS-2505".into(), 3),
            ],
        );

        semester.remove_course("Free Elective").unwrap();

        assert_eq!(semester.course_references, ["Free Elective", "CS-2505"]);
        assert_eq!(semester.total_credits, 6);
        assert!(semester.verify().is_ok());
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut semester = Semester::new(1, vec![]);
        semester.insert_course(Some(10), CourseEntry::new("CS-1114".into(), "".into(), 3));

        assert_eq!(semester.len(), 1);
        assert_eq!(semester.total_credits, 3);
    }

    #[test]
    fn test_verify_detects_credit_mismatch() {
        let mut plan = DegreePlan::from_template(&template(), "hokie1");
        plan.semesters[0].total_credits = 99;

        assert!(matches!(
            plan.verify(),
            Err(InvariantViolation::CreditMismatch { semester: 1, .. })
        ));
    }

    #[test]
    fn test_verify_detects_duplicate_placement() {
        let mut plan = DegreePlan::from_template(&template(), "hokie1");
        let duplicate = plan.semesters[0].courses[0].clone();
        plan.semesters[1].insert_course(None, duplicate);

        assert_eq!(
            plan.verify(),
            Err(InvariantViolation::DuplicatePlacement {
                course_id: "CS-1114".to_string()
            })
        );
    }

    #[test]
    fn test_verify_detects_stale_references() {
        let mut plan = DegreePlan::from_template(&template(), "hokie1");
        plan.semesters[0].course_references.pop();

        assert_eq!(
            plan.verify(),
            Err(InvariantViolation::StaleReferences { semester: 1 })
        );
    }
}
