use crate::entities::{
    int,
    json::{
        ApRecords, CourseEntries, ElectiveRecords, PathwayRecords, StringList, TransferRecords,
    },
    plan_semesters, plans,
};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use models::plan::{DegreePlan, Semester};
use planner::{
    error::{PlanError, PlanResult},
    store::PlanStore,
};
use sea_orm::{
    AccessMode, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder,
    SqlErr, TransactionTrait,
};
use uuid::Uuid;

/// Plans stored as one `plans` row plus one `plan_semesters` row per semester
#[derive(Clone)]
pub struct PlanService {
    db: DatabaseConnection,
}

impl PlanService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn user_exists<C: ConnectionTrait>(db: &C, user_id: &str) -> PlanResult<bool> {
        let count = plans::Entity::find_by_id(user_id.to_string())
            .count(db)
            .await
            .map_err(PlanError::storage)?;

        Ok(count > 0)
    }
}

/// Builds the `plans` row for `plan` at `revision`
pub fn plan_row(plan: &DegreePlan, revision: u64) -> PlanResult<plans::ActiveModel> {
    let now = Utc::now().naive_utc();

    Ok(plans::ActiveModel {
        user_id: Set(plan.user_id.clone()),
        checksheet_id: Set(plan.checksheet_id.clone()),
        major: Set(plan.major.clone()),
        year: Set(i32::from(plan.year)),
        total_credits: Set(int(plan.total_credits)?),
        revision: Set(int(revision)?),
        ap_equivalents: Set(ApRecords(plan.ap_equivalents.clone())),
        transfer_courses: Set(TransferRecords(plan.transfer_courses.clone())),
        pathways: Set(PathwayRecords(plan.pathways.clone())),
        electives: Set(ElectiveRecords(plan.electives.clone())),
        pathway_ids: Set(StringList(plan.pathway_ids.iter().cloned().collect())),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

/// Builds one `plan_semesters` row per semester of `plan`
pub fn semester_rows(plan: &DegreePlan) -> PlanResult<Vec<plan_semesters::ActiveModel>> {
    plan.semesters
        .iter()
        .map(|semester| {
            Ok(plan_semesters::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(plan.user_id.clone()),
                sem_num: Set(int(semester.number)?),
                total_credits: Set(int(semester.total_credits)?),
                courses: Set(CourseEntries(semester.courses.clone())),
                course_references: Set(StringList(semester.course_references.clone())),
            })
        })
        .collect()
}

/// Reassembles a plan from its stored rows
pub fn plan_from_rows(
    plan: plans::Model,
    semesters: Vec<plan_semesters::Model>,
) -> PlanResult<DegreePlan> {
    let mut semesters = semesters
        .into_iter()
        .map(|row| {
            Ok(Semester {
                number: int(row.sem_num)?,
                total_credits: int(row.total_credits)?,
                courses: row.courses.0,
                course_references: row.course_references.0,
            })
        })
        .collect::<PlanResult<Vec<_>>>()?;
    semesters.sort_by_key(|sem| sem.number);

    Ok(DegreePlan {
        user_id: plan.user_id,
        checksheet_id: plan.checksheet_id,
        major: plan.major,
        year: int(plan.year)?,
        total_credits: int(plan.total_credits)?,
        revision: int(plan.revision)?,
        semesters,
        ap_equivalents: plan.ap_equivalents.0,
        transfer_courses: plan.transfer_courses.0,
        pathways: plan.pathways.0,
        electives: plan.electives.0,
        pathway_ids: plan.pathway_ids.0.into_iter().collect(),
    })
}

#[async_trait]
impl PlanStore for PlanService {
    async fn get(&self, user_id: &str) -> PlanResult<Option<DegreePlan>> {
        // Both reads see the same snapshot, so semesters always match the plan row
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
            .map_err(PlanError::storage)?;

        let Some(plan) = plans::Entity::find_by_id(user_id.to_string())
            .one(&txn)
            .await
            .map_err(PlanError::storage)?
        else {
            return Ok(None);
        };

        let semesters = plan_semesters::Entity::find()
            .filter(plan_semesters::Column::UserId.eq(user_id))
            .order_by_asc(plan_semesters::Column::SemNum)
            .all(&txn)
            .await
            .map_err(PlanError::storage)?;

        txn.commit().await.map_err(PlanError::storage)?;

        plan_from_rows(plan, semesters).map(Some)
    }

    async fn exists(&self, user_id: &str) -> PlanResult<bool> {
        Self::user_exists(&self.db, user_id).await
    }

    async fn create(&self, plan: &DegreePlan) -> PlanResult<()> {
        let row = plan_row(plan, plan.revision)?;
        let semesters = semester_rows(plan)?;

        let txn = self.db.begin().await.map_err(PlanError::storage)?;

        if let Err(err) = plans::Entity::insert(row).exec_without_returning(&txn).await {
            return Err(match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    PlanError::UserAlreadyExists(plan.user_id.clone())
                }
                _ => PlanError::storage(err),
            });
        }

        if !semesters.is_empty() {
            plan_semesters::Entity::insert_many(semesters)
                .exec_without_returning(&txn)
                .await
                .map_err(PlanError::storage)?;
        }

        txn.commit().await.map_err(PlanError::storage)?;

        debug!("Stored new plan for {}", plan.user_id);
        Ok(())
    }

    async fn put(&self, plan: &DegreePlan) -> PlanResult<u64> {
        let revision = plan.revision + 1;

        let mut row = plan_row(plan, revision)?;
        row.user_id = NotSet;
        row.created_at = NotSet;
        let semesters = semester_rows(plan)?;

        // Dropping the transaction without committing rolls it back
        let txn = self.db.begin().await.map_err(PlanError::storage)?;

        let updated = plans::Entity::update_many()
            .set(row)
            .filter(plans::Column::UserId.eq(plan.user_id.as_str()))
            .filter(plans::Column::Revision.eq(int::<u64, i64>(plan.revision)?))
            .exec(&txn)
            .await
            .map_err(PlanError::storage)?;

        if updated.rows_affected == 0 {
            if Self::user_exists(&txn, &plan.user_id).await? {
                warn!(
                    "Rejected stale write for {} at revision {}",
                    plan.user_id, plan.revision
                );
                return Err(PlanError::Conflict(plan.user_id.clone()));
            }
            return Err(PlanError::UserNotFound(plan.user_id.clone()));
        }

        plan_semesters::Entity::delete_many()
            .filter(plan_semesters::Column::UserId.eq(plan.user_id.as_str()))
            .exec(&txn)
            .await
            .map_err(PlanError::storage)?;

        if !semesters.is_empty() {
            plan_semesters::Entity::insert_many(semesters)
                .exec_without_returning(&txn)
                .await
                .map_err(PlanError::storage)?;
        }

        txn.commit().await.map_err(PlanError::storage)?;

        debug!("Stored plan for {} at revision {revision}", plan.user_id);
        Ok(revision)
    }
}
