use crate::{
    m20250801_create_catalog_tables::{Checksheets, Courses},
    m20250801_create_plan_tables::PlanSemesters,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per semester number within a plan
        manager
            .create_index(
                Index::create()
                    .name("idx_plan_semesters_user_id_sem_num")
                    .table(PlanSemesters::Table)
                    .col(PlanSemesters::UserId)
                    .col(PlanSemesters::SemNum)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_category")
                    .table(Courses::Table)
                    .col(Courses::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_checksheets_major_year")
                    .table(Checksheets::Table)
                    .col(Checksheets::Major)
                    .col(Checksheets::Year)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_checksheets_major_year")
                    .table(Checksheets::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_category")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_plan_semesters_user_id_sem_num")
                    .table(PlanSemesters::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
