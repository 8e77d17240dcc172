use models::{course::Course, requisite::Requisites};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: String,
    pub category: String,
    pub number: String,
    pub name: String,
    pub course_type: String,
    pub credits: u32,
    /// AND of OR-groups; every inner list needs one of its courses
    pub prerequisites: Vec<Vec<String>>,
    pub corequisites: Vec<Vec<String>>,
    pub pathways: Vec<String>,
    pub has_lab: bool,
    pub min_grade: Option<String>,
}

pub fn requisite_groups(requisites: &Requisites) -> Vec<Vec<String>> {
    requisites
        .groups()
        .iter()
        .map(|group| group.alternatives().to_vec())
        .collect()
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            category: course.category().to_string(),
            number: course.number().to_string(),
            course_type: course.course_type.to_string(),
            prerequisites: requisite_groups(&course.prerequisites),
            corequisites: requisite_groups(&course.corequisites),
            id: course.id,
            name: course.name,
            credits: course.credits,
            pathways: course.pathways,
            has_lab: course.has_lab,
            min_grade: course.min_grade,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseSearchQuery {
    /// Category prefix such as `MA`, or the exact category when `number` is set
    pub category: String,
    /// Course number prefix
    pub number: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseNameQuery {
    /// Leading characters of the course title
    pub name: String,
}
