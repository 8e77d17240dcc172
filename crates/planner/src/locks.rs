use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-user write serialization.
///
/// Mutating requests for the same user queue behind one another; requests
/// for different users never contend. Idle entries are dropped the next time
/// a lock is handed out.
#[derive(Debug, Default)]
pub struct PlanLocks {
    users: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl PlanLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other request holds `user_id`'s plan
    pub async fn acquire(&self, user_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut users = self.users.lock().await;
            users.retain(|_, lock| Arc::strong_count(lock) > 1);

            users
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }

    /// Users with a queued or running write
    pub async fn active(&self) -> usize {
        self.users
            .lock()
            .await
            .values()
            .filter(|lock| Arc::strong_count(lock) > 1)
            .count()
    }
}
