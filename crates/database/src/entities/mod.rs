pub mod ap_equivalents;
pub mod checksheets;
pub mod courses;
pub mod json;
pub mod pathway_categories;
pub mod plan_semesters;
pub mod plans;

use planner::error::{PlanError, PlanResult};
use std::fmt::Display;

/// Converts between signed integer columns and unsigned domain fields
pub(crate) fn int<T, U>(value: T) -> PlanResult<U>
where
    U: TryFrom<T>,
    U::Error: Display,
{
    U::try_from(value).map_err(PlanError::storage)
}
