//! In-process implementations of the collaborator traits, used by tests and
//! for running the server against fixture data.

use crate::{
    error::{PlanError, PlanResult},
    store::{ChecksheetTemplates, CourseCatalog, PlanStore, StaticReference},
};
use async_trait::async_trait;
use log::warn;
use models::{
    checksheet::{ChecksheetTemplate, Major, checksheet_id},
    course::Course,
    equivalent::{ApEquivalent, PathwayCategory},
    plan::DegreePlan,
};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    courses: HashMap<String, Course>,
}

impl MemoryCatalog {
    pub fn new(courses: impl IntoIterator<Item = Course>) -> Self {
        Self {
            courses: courses.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    fn matching(&self, predicate: impl Fn(&Course) -> bool) -> Vec<Course> {
        let mut courses: Vec<Course> = self
            .courses
            .values()
            .filter(|c| predicate(c))
            .cloned()
            .collect();
        courses.sort_by(|a, b| a.id.cmp(&b.id));
        courses
    }
}

#[async_trait]
impl CourseCatalog for MemoryCatalog {
    async fn get(&self, course_id: &str) -> PlanResult<Option<Course>> {
        Ok(self.courses.get(course_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> PlanResult<Option<Course>> {
        Ok(self.matching(|c| c.name == name).into_iter().next())
    }

    async fn search(&self, category: &str, number: Option<&str>) -> PlanResult<Vec<Course>> {
        Ok(match number {
            Some(number) => {
                self.matching(|c| c.category() == category && c.number().starts_with(number))
            }
            None => self.matching(|c| c.category().starts_with(category)),
        })
    }

    async fn search_by_name(&self, prefix: &str) -> PlanResult<Vec<Course>> {
        Ok(self.matching(|c| c.name.starts_with(prefix)))
    }
}

#[derive(Debug, Default)]
pub struct MemoryTemplates {
    templates: HashMap<String, ChecksheetTemplate>,
}

impl MemoryTemplates {
    pub fn new(templates: impl IntoIterator<Item = ChecksheetTemplate>) -> Self {
        Self {
            templates: templates.into_iter().map(|t| (t.id(), t)).collect(),
        }
    }
}

#[async_trait]
impl ChecksheetTemplates for MemoryTemplates {
    async fn get(&self, major: &str, year: u16) -> PlanResult<Option<ChecksheetTemplate>> {
        Ok(self.templates.get(&checksheet_id(major, year)).cloned())
    }

    async fn majors(&self) -> PlanResult<Vec<Major>> {
        let majors: BTreeMap<String, Major> = self
            .templates
            .values()
            .map(|t| (t.major.clone(), t.major()))
            .collect();
        Ok(majors.into_values().collect())
    }
}

#[derive(Debug, Default)]
pub struct MemoryReference {
    pub ap_equivalents: Vec<ApEquivalent>,
    pub pathway_categories: Vec<PathwayCategory>,
}

#[async_trait]
impl StaticReference for MemoryReference {
    async fn ap_equivalents(&self) -> PlanResult<Vec<ApEquivalent>> {
        Ok(self.ap_equivalents.clone())
    }

    async fn pathway_categories(&self) -> PlanResult<Vec<PathwayCategory>> {
        Ok(self.pathway_categories.clone())
    }
}

/// Plans held in memory; each write replaces the whole plan atomically
#[derive(Debug, Default)]
pub struct MemoryPlanStore {
    plans: RwLock<HashMap<String, DegreePlan>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlanStore for MemoryPlanStore {
    async fn get(&self, user_id: &str) -> PlanResult<Option<DegreePlan>> {
        Ok(self.plans.read().await.get(user_id).cloned())
    }

    async fn exists(&self, user_id: &str) -> PlanResult<bool> {
        Ok(self.plans.read().await.contains_key(user_id))
    }

    async fn create(&self, plan: &DegreePlan) -> PlanResult<()> {
        let mut plans = self.plans.write().await;

        if plans.contains_key(&plan.user_id) {
            return Err(PlanError::UserAlreadyExists(plan.user_id.clone()));
        }

        plans.insert(plan.user_id.clone(), plan.clone());
        Ok(())
    }

    async fn put(&self, plan: &DegreePlan) -> PlanResult<u64> {
        let mut plans = self.plans.write().await;

        let stored = plans
            .get_mut(&plan.user_id)
            .ok_or_else(|| PlanError::UserNotFound(plan.user_id.clone()))?;

        if stored.revision != plan.revision {
            warn!(
                "Rejected stale write for {} (revision {} != {})",
                plan.user_id, plan.revision, stored.revision
            );
            return Err(PlanError::Conflict(plan.user_id.clone()));
        }

        let mut updated = plan.clone();
        updated.revision += 1;
        let revision = updated.revision;
        *stored = updated;

        Ok(revision)
    }
}
