use models::{
    checksheet::Major,
    equivalent::{ApEquivalent, PathwayCategory},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApEquivalentResponse {
    pub id: u32,
    pub abbreviation: String,
    pub name: String,
    pub score: String,
    pub course_id: String,
    pub course_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathwayCategoryResponse {
    pub code: String,
    pub name: String,
}

impl From<ApEquivalent> for ApEquivalentResponse {
    fn from(equivalent: ApEquivalent) -> Self {
        Self {
            id: equivalent.id,
            abbreviation: equivalent.abbreviation,
            name: equivalent.name,
            score: equivalent.score,
            course_id: equivalent.course_id,
            course_name: equivalent.course_name,
        }
    }
}

impl From<PathwayCategory> for PathwayCategoryResponse {
    fn from(category: PathwayCategory) -> Self {
        Self {
            code: category.code,
            name: category.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MajorResponse {
    pub code: String,
    pub name: String,
    pub school: String,
}

impl From<Major> for MajorResponse {
    fn from(major: Major) -> Self {
        Self {
            code: major.code,
            name: major.name,
            school: major.school,
        }
    }
}
