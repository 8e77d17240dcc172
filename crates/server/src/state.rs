use planner::Advisor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<Advisor>,
}

impl AppState {
    pub fn new(advisor: Advisor) -> Self {
        Self {
            advisor: Arc::new(advisor),
        }
    }
}
