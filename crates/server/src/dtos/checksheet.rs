use crate::{dtos::course::requisite_groups, error::ApiError};
use models::{
    checksheet::{ChecksheetTemplate, PathwayCourse, SemesterTemplate, TemplateEntry},
    equivalent::CreditSource,
};
use planner::{MoveRequest, MoveStatus, SlotAssignment};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveCourseRequest {
    pub user_id: String,
    pub course_id: String,
    pub from_sem: u32,
    pub to_sem: u32,
    /// Position in the destination semester; appended when absent
    pub to_index: Option<usize>,
}

impl From<MoveCourseRequest> for MoveRequest {
    fn from(request: MoveCourseRequest) -> Self {
        Self {
            course_id: request.course_id,
            from_sem: request.from_sem,
            to_sem: request.to_sem,
            to_index: request.to_index,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveStatusResponse {
    pub prerequisites_met: bool,
    pub corequisites_met: bool,
    pub has_dependents: bool,
    pub unmet_prereqs: Vec<Vec<String>>,
    pub unmet_coreqs: Vec<Vec<String>>,
    pub dependent_course_ids: Vec<String>,
    pub moved: bool,
}

impl From<MoveStatus> for MoveStatusResponse {
    fn from(status: MoveStatus) -> Self {
        Self {
            prerequisites_met: status.prerequisites_met,
            corequisites_met: status.corequisites_met,
            has_dependents: status.has_dependents,
            unmet_prereqs: requisite_groups(&status.unmet_prereqs),
            unmet_coreqs: requisite_groups(&status.unmet_coreqs),
            dependent_course_ids: status.dependent_course_ids,
            moved: status.moved,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathwayAssignmentRequest {
    pub user_id: String,
    pub semester: u32,
    pub slot_id: String,
    pub course_id: String,
    /// `AP`, `Transfer` or `Catalog`
    pub source: String,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElectiveAssignmentRequest {
    pub user_id: String,
    pub semester: u32,
    pub slot_id: String,
    pub course_id: String,
    /// `AP`, `Transfer` or `Catalog`
    pub source: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnassignRequest {
    pub user_id: String,
    /// Course, AP or transfer id currently filling the slot
    pub course_id: String,
}

fn credit_source(raw: &str) -> Result<CreditSource, ApiError> {
    raw.parse().map_err(ApiError::Validation)
}

impl TryFrom<&PathwayAssignmentRequest> for SlotAssignment {
    type Error = ApiError;

    fn try_from(request: &PathwayAssignmentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            semester: request.semester,
            slot_id: request.slot_id.clone(),
            course_id: request.course_id.clone(),
            source: credit_source(&request.source)?,
            category: request.category.clone(),
        })
    }
}

impl TryFrom<&ElectiveAssignmentRequest> for SlotAssignment {
    type Error = ApiError;

    fn try_from(request: &ElectiveAssignmentRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            semester: request.semester,
            slot_id: request.slot_id.clone(),
            course_id: request.course_id.clone(),
            source: credit_source(&request.source)?,
            category: None,
        })
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct DefaultChecksheetQuery {
    /// Major code, e.g. `CS`
    pub major: String,
    pub grad_year: u16,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChecksheetResponse {
    pub id: String,
    pub major: String,
    pub major_name: String,
    pub year: u16,
    pub school: String,
    pub total_credits: u32,
    pub semesters: Vec<SemesterTemplateResponse>,
    pub pathway_ids: Vec<String>,
    pub pathways: Vec<PathwayCourseResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemesterTemplateResponse {
    pub number: u32,
    pub total_credits: u32,
    pub courses: Vec<TemplateEntryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateEntryResponse {
    pub course_id: String,
    pub name: String,
    pub credits: u32,
    pub elective: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathwayCourseResponse {
    pub course_id: String,
    pub name: String,
    pub category: String,
}

impl From<TemplateEntry> for TemplateEntryResponse {
    fn from(entry: TemplateEntry) -> Self {
        Self {
            course_id: entry.course_id,
            name: entry.name,
            credits: entry.credits,
            elective: entry.elective,
        }
    }
}

impl From<SemesterTemplate> for SemesterTemplateResponse {
    fn from(semester: SemesterTemplate) -> Self {
        Self {
            number: semester.number,
            total_credits: semester.total_credits,
            courses: semester.courses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PathwayCourse> for PathwayCourseResponse {
    fn from(pathway: PathwayCourse) -> Self {
        Self {
            course_id: pathway.course_id,
            name: pathway.name,
            category: pathway.category,
        }
    }
}

impl From<ChecksheetTemplate> for ChecksheetResponse {
    fn from(template: ChecksheetTemplate) -> Self {
        Self {
            id: template.id(),
            major: template.major,
            major_name: template.major_name,
            year: template.year,
            school: template.school,
            total_credits: template.total_credits,
            semesters: template.semesters.into_iter().map(Into::into).collect(),
            pathway_ids: template.pathway_ids,
            pathways: template.pathways.into_iter().map(Into::into).collect(),
        }
    }
}
