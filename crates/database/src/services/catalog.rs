use crate::entities::{ap_equivalents, checksheets, courses, pathway_categories};
use async_trait::async_trait;
use models::{
    checksheet::{ChecksheetTemplate, Major, checksheet_id},
    course::Course,
    equivalent::{ApEquivalent, PathwayCategory},
};
use planner::{
    error::{PlanError, PlanResult},
    store::{ChecksheetTemplates, CourseCatalog, StaticReference},
};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::BTreeMap;

/// Read-only access to the catalog, checksheet and reference tables
#[derive(Clone)]
pub struct CatalogService {
    db: DatabaseConnection,
}

impl CatalogService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn courses_where(&self, condition: Condition) -> PlanResult<Vec<Course>> {
        courses::Entity::find()
            .filter(condition)
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .map_err(PlanError::storage)?
            .into_iter()
            .map(Course::try_from)
            .collect()
    }
}

#[async_trait]
impl CourseCatalog for CatalogService {
    async fn get(&self, course_id: &str) -> PlanResult<Option<Course>> {
        courses::Entity::find_by_id(course_id.to_string())
            .one(&self.db)
            .await
            .map_err(PlanError::storage)?
            .map(Course::try_from)
            .transpose()
    }

    async fn find_by_name(&self, name: &str) -> PlanResult<Option<Course>> {
        courses::Entity::find()
            .filter(courses::Column::Name.eq(name))
            .order_by_asc(courses::Column::Id)
            .one(&self.db)
            .await
            .map_err(PlanError::storage)?
            .map(Course::try_from)
            .transpose()
    }

    async fn search(&self, category: &str, number: Option<&str>) -> PlanResult<Vec<Course>> {
        let condition = match number {
            Some(number) => Condition::all()
                .add(courses::Column::Category.eq(category))
                .add(courses::Column::Number.starts_with(number)),
            None => Condition::all().add(courses::Column::Category.starts_with(category)),
        };

        self.courses_where(condition).await
    }

    async fn search_by_name(&self, prefix: &str) -> PlanResult<Vec<Course>> {
        self.courses_where(Condition::all().add(courses::Column::Name.starts_with(prefix)))
            .await
    }
}

#[async_trait]
impl ChecksheetTemplates for CatalogService {
    async fn get(&self, major: &str, year: u16) -> PlanResult<Option<ChecksheetTemplate>> {
        checksheets::Entity::find_by_id(checksheet_id(major, year))
            .one(&self.db)
            .await
            .map_err(PlanError::storage)?
            .map(ChecksheetTemplate::try_from)
            .transpose()
    }

    async fn majors(&self) -> PlanResult<Vec<Major>> {
        let rows: Vec<(String, String, String)> = checksheets::Entity::find()
            .select_only()
            .columns([
                checksheets::Column::Major,
                checksheets::Column::MajorName,
                checksheets::Column::School,
            ])
            .distinct()
            .order_by_asc(checksheets::Column::Major)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(PlanError::storage)?;

        // A renamed major can appear under several checksheet years
        let majors: BTreeMap<String, Major> = rows
            .into_iter()
            .map(|(code, name, school)| (code.clone(), Major { code, name, school }))
            .collect();

        Ok(majors.into_values().collect())
    }
}

#[async_trait]
impl StaticReference for CatalogService {
    async fn ap_equivalents(&self) -> PlanResult<Vec<ApEquivalent>> {
        ap_equivalents::Entity::find()
            .order_by_asc(ap_equivalents::Column::Id)
            .all(&self.db)
            .await
            .map_err(PlanError::storage)?
            .into_iter()
            .map(ApEquivalent::try_from)
            .collect()
    }

    async fn pathway_categories(&self) -> PlanResult<Vec<PathwayCategory>> {
        Ok(pathway_categories::Entity::find()
            .order_by_asc(pathway_categories::Column::Code)
            .all(&self.db)
            .await
            .map_err(PlanError::storage)?
            .into_iter()
            .map(PathwayCategory::from)
            .collect())
    }
}
