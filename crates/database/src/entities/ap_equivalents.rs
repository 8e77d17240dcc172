use super::int;
use models::equivalent::ApEquivalent;
use planner::error::PlanError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ap_equivalents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub abbreviation: String,
    pub name: String,
    pub score: String,
    pub course_id: String,
    pub course_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ApEquivalent {
    type Error = PlanError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(ApEquivalent {
            id: int(model.id)?,
            abbreviation: model.abbreviation,
            name: model.name,
            score: model.score,
            course_id: model.course_id,
            course_name: model.course_name,
        })
    }
}
