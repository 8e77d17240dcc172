use planner::NewPlan;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub user_id: String,
    pub major: String,
    pub grad_year: u16,
    /// AP equivalent ids from `/resources/ap-equivalents`
    #[serde(default)]
    pub ap_equivalents: Vec<u32>,
    /// Course ids such as `MATH-1225`
    #[serde(default)]
    pub transfer_credits: Vec<String>,
}

impl From<CreateUserRequest> for NewPlan {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            user_id: request.user_id,
            major: request.major,
            year: request.grad_year,
            ap_equivalents: request.ap_equivalents,
            transfer_credits: request.transfer_credits,
        }
    }
}
