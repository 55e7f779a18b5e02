use indexmap::IndexMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::{DirectoryError, Result};
use crate::models::Activity;

/// Storage seam for the activity directory.
///
/// `add_participant` and `remove_participant` must check membership and
/// capacity and apply the change as one step.
#[async_trait]
pub trait ActivityRepo: Send + Sync {
    async fn list(&self) -> IndexMap<String, Activity>;

    async fn add_participant(&self, activity_name: &str, email: &str) -> Result<()>;

    async fn remove_participant(&self, activity_name: &str, email: &str) -> Result<()>;
}

pub struct InMemoryActivityRepo {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl InMemoryActivityRepo {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }
}

impl Default for InMemoryActivityRepo {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ActivityRepo for InMemoryActivityRepo {
    async fn list(&self) -> IndexMap<String, Activity> {
        self.activities.read().await.clone()
    }

    async fn add_participant(&self, activity_name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        activity.admit(email)
    }

    async fn remove_participant(&self, activity_name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        activity.release(email)
    }
}
