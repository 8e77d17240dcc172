use models::{
    equivalent::{
        ApEquivalentRecord, ElectiveFulfillment, PathwayFulfillment, SlotRef, TransferCourse,
    },
    plan::{CourseEntry, DegreePlan, Semester},
};
use serde::Serialize;
use utoipa::ToSchema;

/// A user's plan as returned to clients
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub user_id: String,
    pub checksheet_id: String,
    pub major: String,
    pub year: u16,
    pub total_credits: u32,
    pub revision: u64,
    pub semesters: Vec<SemesterResponse>,
    pub ap_equivalents: Vec<ApCreditResponse>,
    pub transfer_courses: Vec<TransferCourseResponse>,
    pub pathways: Vec<PathwayFulfillmentResponse>,
    pub electives: Vec<ElectiveFulfillmentResponse>,
    pub pathway_ids: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SemesterResponse {
    pub number: u32,
    pub total_credits: u32,
    pub courses: Vec<CourseEntryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseEntryResponse {
    pub course_id: String,
    pub name: String,
    pub credits: u32,
    pub completed: bool,
    pub pathway: bool,
    pub elective: bool,
    pub used: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApCreditResponse {
    pub id: u32,
    pub abbreviation: String,
    pub name: String,
    pub score: String,
    pub course_id: String,
    pub course_name: String,
    pub used: bool,
    pub pathway: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferCourseResponse {
    pub course_id: String,
    pub name: String,
    pub credits: u32,
    pub used: bool,
    pub pathway: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub slot_id: String,
    pub name: String,
    pub credits: u32,
    pub semester: u32,
    pub position: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathwayFulfillmentResponse {
    pub course_id: String,
    pub category: String,
    pub completed: bool,
    /// `AP`, `Transfer` or `Catalog`; absent for template pathway courses
    pub source: Option<String>,
    pub slot: Option<SlotResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElectiveFulfillmentResponse {
    pub course_id: String,
    pub source: String,
    pub slot: SlotResponse,
}

impl From<CourseEntry> for CourseEntryResponse {
    fn from(entry: CourseEntry) -> Self {
        Self {
            course_id: entry.course_id,
            name: entry.name,
            credits: entry.credits,
            completed: entry.completed,
            pathway: entry.pathway,
            elective: entry.elective,
            used: entry.used,
        }
    }
}

impl From<Semester> for SemesterResponse {
    fn from(semester: Semester) -> Self {
        Self {
            number: semester.number,
            total_credits: semester.total_credits,
            courses: semester.courses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ApEquivalentRecord> for ApCreditResponse {
    fn from(record: ApEquivalentRecord) -> Self {
        let equivalent = record.equivalent;

        Self {
            id: equivalent.id,
            abbreviation: equivalent.abbreviation,
            name: equivalent.name,
            score: equivalent.score,
            course_id: equivalent.course_id,
            course_name: equivalent.course_name,
            used: record.used,
            pathway: record.pathway,
        }
    }
}

impl From<TransferCourse> for TransferCourseResponse {
    fn from(course: TransferCourse) -> Self {
        Self {
            course_id: course.course_id,
            name: course.name,
            credits: course.credits,
            used: course.used,
            pathway: course.pathway,
        }
    }
}

impl From<SlotRef> for SlotResponse {
    fn from(slot: SlotRef) -> Self {
        Self {
            slot_id: slot.slot_id,
            name: slot.name,
            credits: slot.credits,
            semester: slot.semester,
            position: slot.position,
        }
    }
}

impl From<PathwayFulfillment> for PathwayFulfillmentResponse {
    fn from(pathway: PathwayFulfillment) -> Self {
        Self {
            course_id: pathway.course_id,
            category: pathway.category,
            completed: pathway.completed,
            source: pathway.source.map(|source| source.to_string()),
            slot: pathway.slot.map(Into::into),
        }
    }
}

impl From<ElectiveFulfillment> for ElectiveFulfillmentResponse {
    fn from(elective: ElectiveFulfillment) -> Self {
        Self {
            course_id: elective.course_id,
            source: elective.source.to_string(),
            slot: elective.slot.into(),
        }
    }
}

impl From<DegreePlan> for PlanResponse {
    fn from(plan: DegreePlan) -> Self {
        Self {
            user_id: plan.user_id,
            checksheet_id: plan.checksheet_id,
            major: plan.major,
            year: plan.year,
            total_credits: plan.total_credits,
            revision: plan.revision,
            semesters: plan.semesters.into_iter().map(Into::into).collect(),
            ap_equivalents: plan.ap_equivalents.into_iter().map(Into::into).collect(),
            transfer_courses: plan.transfer_courses.into_iter().map(Into::into).collect(),
            pathways: plan.pathways.into_iter().map(Into::into).collect(),
            electives: plan.electives.into_iter().map(Into::into).collect(),
            pathway_ids: plan.pathway_ids.into_iter().collect(),
        }
    }
}
