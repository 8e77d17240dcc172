use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .string()
                            .not_null()
                            .primary_key()
                    )
                    .col(ColumnDef::new(Courses::Category).string().not_null())
                    .col(ColumnDef::new(Courses::Number).string().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(
                        ColumnDef::new(Courses::CourseType)
                            .string()
                            .not_null()
                            .default("None"),
                    )
                    .col(ColumnDef::new(Courses::Credits).integer().not_null())
                    .col(ColumnDef::new(Courses::Prerequisites).text())
                    .col(ColumnDef::new(Courses::Corequisites).text())
                    .col(
                        ColumnDef::new(Courses::Pathways)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Courses::HasLab)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Courses::MinGrade).string())
                    .to_owned(),
            )
            .await?;

        // Create checksheets table, one row per major and catalog year
        manager
            .create_table(
                Table::create()
                    .table(Checksheets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Checksheets::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Checksheets::Major).string().not_null())
                    .col(ColumnDef::new(Checksheets::MajorName).string().not_null())
                    .col(ColumnDef::new(Checksheets::Year).integer().not_null())
                    .col(ColumnDef::new(Checksheets::School).string().not_null())
                    .col(
                        ColumnDef::new(Checksheets::TotalCredits)
                            .integer()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Checksheets::Semesters)
                            .json_binary()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Checksheets::PathwayIds)
                            .json_binary()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Checksheets::Pathways)
                            .json_binary()
                            .not_null()
                    )
                    .to_owned(),
            )
            .await?;

        // Create ap_equivalents table
        manager
            .create_table(
                Table::create()
                    .table(ApEquivalents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApEquivalents::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApEquivalents::Abbreviation)
                            .string()
                            .not_null()
                    )
                    .col(ColumnDef::new(ApEquivalents::Name).string().not_null())
                    .col(ColumnDef::new(ApEquivalents::Score).string().not_null())
                    .col(ColumnDef::new(ApEquivalents::CourseId).string().not_null())
                    .col(
                        ColumnDef::new(ApEquivalents::CourseName)
                            .string()
                            .not_null()
                    )
                    .to_owned(),
            )
            .await?;

        // Create pathway_categories table
        manager
            .create_table(
                Table::create()
                    .table(PathwayCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PathwayCategories::Code)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PathwayCategories::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PathwayCategories::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ApEquivalents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Checksheets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Courses {
    Table,
    Id,
    Category,
    Number,
    Name,
    CourseType,
    Credits,
    Prerequisites,
    Corequisites,
    Pathways,
    HasLab,
    MinGrade,
}

#[derive(Iden)]
pub(crate) enum Checksheets {
    Table,
    Id,
    Major,
    MajorName,
    Year,
    School,
    TotalCredits,
    Semesters,
    PathwayIds,
    Pathways,
}

#[derive(Iden)]
enum ApEquivalents {
    Table,
    Id,
    Abbreviation,
    Name,
    Score,
    CourseId,
    CourseName,
}

#[derive(Iden)]
enum PathwayCategories {
    Table,
    Code,
    Name,
}
