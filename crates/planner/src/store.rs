//! Collaborators the planner reads from and writes to.
//!
//! Catalog, checksheet and reference data are read-only here; their writers
//! are the bulk loaders. Only the plan store is mutated by the planner.

use crate::error::PlanResult;
use async_trait::async_trait;
use models::{
    checksheet::{ChecksheetTemplate, Major},
    course::Course,
    equivalent::{ApEquivalent, PathwayCategory},
    plan::DegreePlan,
};

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn get(&self, course_id: &str) -> PlanResult<Option<Course>>;

    /// Exact match on the course title
    async fn find_by_name(&self, name: &str) -> PlanResult<Option<Course>>;

    /// Courses whose category starts with `category`. With a `number`, the
    /// category must match exactly and the number is the prefix instead.
    /// Ordered by id.
    async fn search(&self, category: &str, number: Option<&str>) -> PlanResult<Vec<Course>>;

    /// Courses whose title starts with `prefix`, ordered by id
    async fn search_by_name(&self, prefix: &str) -> PlanResult<Vec<Course>>;
}

#[async_trait]
pub trait ChecksheetTemplates: Send + Sync {
    async fn get(&self, major: &str, year: u16) -> PlanResult<Option<ChecksheetTemplate>>;

    /// Every major with at least one checksheet, once each, ordered by code
    async fn majors(&self) -> PlanResult<Vec<Major>>;
}

#[async_trait]
pub trait StaticReference: Send + Sync {
    async fn ap_equivalents(&self) -> PlanResult<Vec<ApEquivalent>>;

    async fn pathway_categories(&self) -> PlanResult<Vec<PathwayCategory>>;
}

/// Per-user plan persistence.
///
/// Writes are whole-plan and guarded by [`DegreePlan::revision`], so a plan
/// read before a concurrent write can never overwrite it.
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn get(&self, user_id: &str) -> PlanResult<Option<DegreePlan>>;

    async fn exists(&self, user_id: &str) -> PlanResult<bool>;

    /// Persists a new plan, failing with `UserAlreadyExists` if one is present
    async fn create(&self, plan: &DegreePlan) -> PlanResult<()>;

    /// Replaces the stored plan if its revision still equals `plan.revision`,
    /// returning the new revision. Fails with `Conflict` otherwise.
    async fn put(&self, plan: &DegreePlan) -> PlanResult<u64>;
}
