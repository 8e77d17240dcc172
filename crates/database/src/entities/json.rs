//! JSONB column payloads. Each wrapper stores a domain list as one document.

use models::{
    checksheet::{PathwayCourse, SemesterTemplate},
    equivalent::{ApEquivalentRecord, ElectiveFulfillment, PathwayFulfillment, TransferCourse},
    plan::CourseEntry,
};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TemplateSemesters(pub Vec<SemesterTemplate>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PathwayCourses(pub Vec<PathwayCourse>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ApRecords(pub Vec<ApEquivalentRecord>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TransferRecords(pub Vec<TransferCourse>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PathwayRecords(pub Vec<PathwayFulfillment>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ElectiveRecords(pub Vec<ElectiveFulfillment>);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CourseEntries(pub Vec<CourseEntry>);
