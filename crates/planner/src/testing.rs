//! Fixtures shared by the planner's unit tests

use crate::memory::{MemoryCatalog, MemoryReference, MemoryTemplates};
use models::{
    checksheet::{ChecksheetTemplate, PathwayCourse, SemesterTemplate, TemplateEntry},
    course::{Course, CourseType},
    equivalent::{ApEquivalent, PathwayCategory, TransferCourse},
    plan::{CourseEntry, DegreePlan, Semester},
    requisite::parse_requisites,
};

pub fn course(id: &str, credits: u32, prerequisites: &str, corequisites: &str) -> Course {
    Course {
        id: id.to_string(),
        name: format!("{id} name"),
        course_type: CourseType::Lecture,
        credits,
        prerequisites: parse_requisites(prerequisites),
        corequisites: parse_requisites(corequisites),
        pathways: vec![],
        has_lab: false,
        min_grade: None,
    }
}

fn pathway_course(id: &str, credits: u32, categories: &[&str]) -> Course {
    Course {
        pathways: categories.iter().map(|c| c.to_string()).collect(),
        ..course(id, credits, "", "")
    }
}

pub fn catalog_courses() -> Vec<Course> {
    vec![
        course("CS-1114", 3, "", ""),
        pathway_course("MATH-1225", 4, &["5f"]),
        course("CS-2114", 3, "CS-1114", ""),
        course("MATH-1226", 4, "MATH-1225", ""),
        course("CS-1944", 1, "", "CS-2114"),
        course("CS-2505", 3, "CS-2114", ""),
        course("MATH-2204", 3, "MATH-1226", ""),
        course("CS-3114", 3, "CS-2505", ""),
        course("PHYS-2305", 4, "", "MATH-1226"),
        course("CS-3214", 3, "CS-2505", ""),
        course("CS-4104", 3, "CS-3114", ""),
        pathway_course("PSYC-1004", 3, &["3", "7"]),
        pathway_course("HIST-1115", 3, &["2"]),
        pathway_course("ENGL-1105", 3, &["1f"]),
    ]
}

pub fn catalog() -> MemoryCatalog {
    MemoryCatalog::new(catalog_courses())
}

fn line(id: &str, credits: u32) -> TemplateEntry {
    TemplateEntry {
        course_id: id.to_string(),
        name: id.to_string(),
        credits,
        elective: false,
    }
}

fn semester(number: u32, courses: Vec<TemplateEntry>) -> SemesterTemplate {
    SemesterTemplate {
        number,
        total_credits: courses.iter().map(|c| c.credits).sum(),
        courses,
    }
}

/// Five-semester CS checksheet:
///
/// | sem | courses |
/// |-----|---------|
/// | 1 | CS-1114, MATH-1225, Pathway 0 |
/// | 2 | CS-2114, MATH-1226, CS-1944 |
/// | 3 | CS-2505, MATH-2204, Free Elective |
/// | 4 | CS-3114, PHYS-2305 |
/// | 5 | CS-3214 |
pub fn template() -> ChecksheetTemplate {
    ChecksheetTemplate {
        major: "CS".to_string(),
        major_name: "Computer Science".to_string(),
        year: 2022,
        school: "College of Engineering".to_string(),
        total_credits: 120,
        semesters: vec![
            semester(
                1,
                vec![
                    line("CS-1114", 3),
                    line("MATH-1225", 4),
                    line("Pathway 0", 3),
                ],
            ),
            semester(
                2,
                vec![
                    line("CS-2114", 3),
                    line("MATH-1226", 4),
                    line("CS-1944", 1),
                ],
            ),
            semester(
                3,
                vec![
                    line("CS-2505", 3),
                    line("MATH-2204", 3),
                    line("Free Elective", 3),
                ],
            ),
            semester(4, vec![line("CS-3114", 3), line("PHYS-2305", 4)]),
            semester(5, vec![line("CS-3214", 3)]),
        ],
        pathway_ids: vec!["MATH-1225".to_string()],
        pathways: vec![PathwayCourse {
            course_id: "MATH-1225".to_string(),
            name: "Calculus I".to_string(),
            category: "5f".to_string(),
        }],
    }
}

pub fn templates() -> MemoryTemplates {
    MemoryTemplates::new([template()])
}

pub fn sample_plan() -> DegreePlan {
    DegreePlan::from_template(&template(), "hokie1")
}

/// A plan with the given `(semester, [(course, credits)])` layout
pub fn plan_with(layout: &[(u32, &[(&str, u32)])]) -> DegreePlan {
    let mut plan = sample_plan();
    plan.semesters = layout
        .iter()
        .map(|(number, courses)| {
            Semester::new(
                *number,
                courses
                    .iter()
                    .map(|(id, credits)| CourseEntry::new(id.to_string(), id.to_string(), *credits))
                    .collect(),
            )
        })
        .collect();
    plan
}

pub fn ap(id: u32, course_id: &str) -> ApEquivalent {
    ApEquivalent {
        id,
        abbreviation: format!("AP{id}"),
        name: format!("Exam {id}"),
        score: "4".to_string(),
        course_id: course_id.to_string(),
        course_name: course_id.to_string(),
    }
}

pub fn transfer(course_id: &str, credits: u32) -> TransferCourse {
    TransferCourse::new(course_id.to_string(), course_id.to_string(), credits)
}

pub fn reference() -> MemoryReference {
    MemoryReference {
        ap_equivalents: vec![
            ap(0, "CS-1114"),
            ap(1, "MATH-1225"),
            ap(2, "PSYC-1004"),
            ap(3, "HIST-1115"),
        ],
        pathway_categories: vec![
            PathwayCategory {
                code: "3".to_string(),
                name: "Reasoning in the Social Sciences".to_string(),
            },
            PathwayCategory {
                code: "5f".to_string(),
                name: "Foundational Quantitative and Computational Thinking".to_string(),
            },
        ],
    }
}
