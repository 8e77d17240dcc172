use super::{int, json::StringList};
use models::{
    course::{Course, CourseType},
    requisite::Requisites,
};
use planner::error::PlanError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String, // e.g. CS-2114
    pub category: String,
    pub number: String,
    pub name: String,
    pub course_type: String,
    pub credits: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub prerequisites: Requisites,
    #[sea_orm(column_type = "Text", nullable)]
    pub corequisites: Requisites,
    #[sea_orm(column_type = "JsonBinary")]
    pub pathways: StringList,
    pub has_lab: bool,
    pub min_grade: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Course {
    type Error = PlanError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Course {
            id: model.id,
            name: model.name,
            course_type: CourseType::from(model.course_type),
            credits: int(model.credits)?,
            prerequisites: model.prerequisites,
            corequisites: model.corequisites,
            pathways: model.pathways.0,
            has_lab: model.has_lab,
            min_grade: model.min_grade,
        })
    }
}
