use super::json::{ApRecords, ElectiveRecords, PathwayRecords, StringList, TransferRecords};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub checksheet_id: String,
    pub major: String,
    pub year: i32,
    pub total_credits: i32,
    /// Compare-and-swap token, bumped on every write
    pub revision: i64,
    #[sea_orm(column_type = "JsonBinary")]
    pub ap_equivalents: ApRecords,
    #[sea_orm(column_type = "JsonBinary")]
    pub transfer_courses: TransferRecords,
    #[sea_orm(column_type = "JsonBinary")]
    pub pathways: PathwayRecords,
    #[sea_orm(column_type = "JsonBinary")]
    pub electives: ElectiveRecords,
    #[sea_orm(column_type = "JsonBinary")]
    pub pathway_ids: StringList,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::plan_semesters::Entity")]
    PlanSemesters,
}

impl Related<super::plan_semesters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanSemesters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
