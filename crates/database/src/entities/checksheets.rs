use super::{
    int,
    json::{PathwayCourses, StringList, TemplateSemesters},
};
use models::checksheet::ChecksheetTemplate;
use planner::error::PlanError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "checksheets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String, // MAJOR-YEAR
    pub major: String,
    pub major_name: String,
    pub year: i32,
    pub school: String,
    pub total_credits: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub semesters: TemplateSemesters,
    #[sea_orm(column_type = "JsonBinary")]
    pub pathway_ids: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub pathways: PathwayCourses,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ChecksheetTemplate {
    type Error = PlanError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(ChecksheetTemplate {
            major: model.major,
            major_name: model.major_name,
            year: int(model.year)?,
            school: model.school,
            total_credits: int(model.total_credits)?,
            semesters: model.semesters.0,
            pathway_ids: model.pathway_ids.0,
            pathways: model.pathways.0,
        })
    }
}
