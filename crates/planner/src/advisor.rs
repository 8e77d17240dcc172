//! Request-level orchestration of the planner.
//!
//! Every mutation follows the same sequence: take the user's lock, load the
//! plan, apply the change in memory, verify the plan, then write it back
//! guarded by its revision.

use crate::{
    checker::{self, MoveRequest, MoveStatus},
    error::{PlanError, PlanResult},
    locks::PlanLocks,
    mover,
    resolver::resolve_equivalents,
    slots::{self, SlotAssignment},
    store::{ChecksheetTemplates, CourseCatalog, PlanStore, StaticReference},
};
use log::{info, warn};
use models::{
    checksheet::{ChecksheetTemplate, Major},
    course::Course,
    equivalent::{ApEquivalent, CreditSource, PathwayCategory, TransferCourse},
    plan::DegreePlan,
};
use std::{
    collections::{BTreeSet, HashSet},
    sync::Arc,
};

/// Parameters for creating a user's plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlan {
    pub user_id: String,
    pub major: String,
    pub year: u16,
    /// AP equivalent reference ids
    pub ap_equivalents: Vec<u32>,
    /// Course ids granted as transfer credit
    pub transfer_credits: Vec<String>,
}

pub struct Advisor {
    catalog: Arc<dyn CourseCatalog>,
    templates: Arc<dyn ChecksheetTemplates>,
    plans: Arc<dyn PlanStore>,
    reference: Arc<dyn StaticReference>,
    locks: PlanLocks,
}

impl Advisor {
    pub fn new(
        catalog: Arc<dyn CourseCatalog>,
        templates: Arc<dyn ChecksheetTemplates>,
        plans: Arc<dyn PlanStore>,
        reference: Arc<dyn StaticReference>,
    ) -> Self {
        Self {
            catalog,
            templates,
            plans,
            reference,
            locks: PlanLocks::new(),
        }
    }

    async fn load(&self, user_id: &str) -> PlanResult<DegreePlan> {
        self.plans
            .get(user_id)
            .await?
            .ok_or_else(|| PlanError::UserNotFound(user_id.to_string()))
    }

    async fn commit(&self, mut plan: DegreePlan) -> PlanResult<DegreePlan> {
        plan.verify()?;
        plan.revision = self.plans.put(&plan).await?;
        Ok(plan)
    }

    async fn transfer_courses(&self, course_ids: &[String]) -> PlanResult<Vec<TransferCourse>> {
        let mut seen = HashSet::new();
        let mut transfers = Vec::new();

        for course_id in course_ids.iter().map(|id| id.trim()) {
            if course_id.is_empty() || !seen.insert(course_id) {
                continue;
            }

            let course = self.course(course_id).await?;
            transfers.push(TransferCourse::new(course.id, course.name, course.credits));
        }

        Ok(transfers)
    }

    async fn equivalents(&self, ids: &[u32]) -> PlanResult<Vec<ApEquivalent>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let known = self.reference.ap_equivalents().await?;

        ids.iter()
            .map(|id| {
                known
                    .iter()
                    .find(|equivalent| equivalent.id == *id)
                    .cloned()
                    .ok_or(PlanError::UnknownEquivalent(*id))
            })
            .collect()
    }

    /// Instantiates a plan from the checksheet for `major`/`year` and applies
    /// the user's equivalent credit
    pub async fn create_plan(&self, request: NewPlan) -> PlanResult<DegreePlan> {
        let user_id = request.user_id.trim();
        if user_id.is_empty() {
            return Err(PlanError::Validation("userId is required".to_string()));
        }
        if request.major.trim().is_empty() {
            return Err(PlanError::Validation("major is required".to_string()));
        }

        let _guard = self.locks.acquire(user_id).await;

        if self.plans.exists(user_id).await? {
            return Err(PlanError::UserAlreadyExists(user_id.to_string()));
        }

        let template = self.default_checksheet(&request.major, request.year).await?;
        let mut plan = DegreePlan::from_template(&template, user_id);

        let transfers = self.transfer_courses(&request.transfer_credits).await?;
        let equivalents = self.equivalents(&request.ap_equivalents).await?;
        resolve_equivalents(&mut plan, transfers, equivalents);

        plan.verify()?;
        self.plans.create(&plan).await?;

        info!("Created checksheet {} for {user_id}", plan.checksheet_id);
        Ok(plan)
    }

    pub async fn plan(&self, user_id: &str) -> PlanResult<DegreePlan> {
        self.load(user_id).await
    }

    /// Evaluates a move without applying it
    pub async fn check_move(&self, user_id: &str, request: &MoveRequest) -> PlanResult<MoveStatus> {
        let plan = self.load(user_id).await?;
        checker::check_move(&plan, self.catalog.as_ref(), request).await
    }

    /// Applies a move when every constraint is met.
    ///
    /// An unmet constraint is an ordinary outcome: the status is returned with
    /// `moved == false` and the plan is left untouched.
    pub async fn move_course(
        &self,
        user_id: &str,
        request: &MoveRequest,
    ) -> PlanResult<MoveStatus> {
        let _guard = self.locks.acquire(user_id).await;

        let mut plan = self.load(user_id).await?;
        let mut status = checker::check_move(&plan, self.catalog.as_ref(), request).await?;

        if !status.is_permitted() {
            warn!(
                "Rejected move of {} from semester {} to {} for {user_id}",
                request.course_id, request.from_sem, request.to_sem
            );
            return Ok(status);
        }

        mover::move_course(&mut plan, request)?;
        self.commit(plan).await?;
        status.moved = true;

        info!(
            "Moved {} from semester {} to {} for {user_id}",
            request.course_id, request.from_sem, request.to_sem
        );
        Ok(status)
    }

    async fn slot_course(&self, assignment: &SlotAssignment) -> PlanResult<Option<Course>> {
        match assignment.source {
            CreditSource::Catalog => self.catalog.get(&assignment.course_id).await,
            CreditSource::Ap | CreditSource::Transfer => Ok(None),
        }
    }

    pub async fn assign_pathway(
        &self,
        user_id: &str,
        assignment: &SlotAssignment,
    ) -> PlanResult<DegreePlan> {
        let _guard = self.locks.acquire(user_id).await;

        let mut plan = self.load(user_id).await?;
        let course = self.slot_course(assignment).await?;
        slots::assign_pathway(&mut plan, assignment, course.as_ref())?;

        self.commit(plan).await
    }

    pub async fn assign_elective(
        &self,
        user_id: &str,
        assignment: &SlotAssignment,
    ) -> PlanResult<DegreePlan> {
        let _guard = self.locks.acquire(user_id).await;

        let mut plan = self.load(user_id).await?;
        let course = self.slot_course(assignment).await?;
        slots::assign_elective(&mut plan, assignment, course.as_ref())?;

        self.commit(plan).await
    }

    pub async fn unassign_slot(&self, user_id: &str, course_id: &str) -> PlanResult<DegreePlan> {
        let _guard = self.locks.acquire(user_id).await;

        let mut plan = self.load(user_id).await?;
        slots::unassign_slot(&mut plan, course_id)?;

        self.commit(plan).await
    }

    pub async fn default_checksheet(
        &self,
        major: &str,
        year: u16,
    ) -> PlanResult<ChecksheetTemplate> {
        self.templates
            .get(major, year)
            .await?
            .ok_or_else(|| PlanError::TemplateNotFound {
                major: major.to_string(),
                year,
            })
    }

    pub async fn course(&self, course_id: &str) -> PlanResult<Course> {
        self.catalog
            .get(course_id)
            .await?
            .ok_or_else(|| PlanError::CourseNotFound(course_id.to_string()))
    }

    pub async fn ap_equivalents(&self) -> PlanResult<Vec<ApEquivalent>> {
        self.reference.ap_equivalents().await
    }

    pub async fn pathway_categories(&self) -> PlanResult<Vec<PathwayCategory>> {
        self.reference.pathway_categories().await
    }

    pub async fn course_by_name(&self, name: &str) -> PlanResult<Course> {
        self.catalog
            .find_by_name(name.trim())
            .await?
            .ok_or_else(|| PlanError::CourseNotFound(name.to_string()))
    }

    /// Prefix search on course ids. An empty category matches nothing.
    pub async fn search_courses(
        &self,
        category: &str,
        number: Option<&str>,
    ) -> PlanResult<Vec<Course>> {
        let category = category.trim().to_uppercase();
        if category.is_empty() {
            return Ok(Vec::new());
        }

        let number = number.map(str::trim).filter(|n| !n.is_empty());
        self.catalog.search(&category, number).await
    }

    /// Prefix search on course titles. An empty prefix matches nothing.
    pub async fn autocomplete_course_name(&self, prefix: &str) -> PlanResult<Vec<Course>> {
        if prefix.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.catalog.search_by_name(prefix).await
    }

    pub async fn majors(&self) -> PlanResult<Vec<Major>> {
        self.templates.majors().await
    }

    /// Schools offering at least one major, ordered by name
    pub async fn schools(&self) -> PlanResult<Vec<String>> {
        let schools: BTreeSet<String> = self
            .templates
            .majors()
            .await?
            .into_iter()
            .map(|major| major.school)
            .collect();

        Ok(schools.into_iter().collect())
    }
}
