use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create plans table, one row per user
        manager
            .create_table(
                Table::create()
                    .table(Plans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Plans::UserId)
                            .string()
                            .not_null()
                            .primary_key()
                    )
                    .col(ColumnDef::new(Plans::ChecksheetId).string().not_null())
                    .col(ColumnDef::new(Plans::Major).string().not_null())
                    .col(ColumnDef::new(Plans::Year).integer().not_null())
                    .col(ColumnDef::new(Plans::TotalCredits).integer().not_null())
                    .col(
                        ColumnDef::new(Plans::Revision)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Plans::ApEquivalents)
                            .json_binary()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Plans::TransferCourses)
                            .json_binary()
                            .not_null()
                    )
                    .col(ColumnDef::new(Plans::Pathways).json_binary().not_null())
                    .col(ColumnDef::new(Plans::Electives).json_binary().not_null())
                    .col(ColumnDef::new(Plans::PathwayIds).json_binary().not_null())
                    .col(
                        ColumnDef::new(Plans::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Plans::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create plan_semesters table; rows are replaced wholesale on every write
        manager
            .create_table(
                Table::create()
                    .table(PlanSemesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlanSemesters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlanSemesters::UserId).string().not_null())
                    .col(ColumnDef::new(PlanSemesters::SemNum).integer().not_null())
                    .col(
                        ColumnDef::new(PlanSemesters::TotalCredits)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(PlanSemesters::Courses)
                            .json_binary()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(PlanSemesters::CourseReferences)
                            .json_binary()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-plan_semesters-user_id")
                            .from(PlanSemesters::Table, PlanSemesters::UserId)
                            .to(Plans::Table, Plans::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(PlanSemesters::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Plans::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Plans {
    Table,
    UserId,
    ChecksheetId,
    Major,
    Year,
    TotalCredits,
    Revision,
    ApEquivalents,
    TransferCourses,
    Pathways,
    Electives,
    PathwayIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(crate) enum PlanSemesters {
    Table,
    Id,
    UserId,
    SemNum,
    TotalCredits,
    Courses,
    CourseReferences,
}
