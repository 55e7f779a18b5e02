use indexmap::IndexMap;

use tracing::{info, warn};

use crate::database::activity_repo::ActivityRepo;
use crate::error::Result;
use crate::models::Activity;

pub async fn list_activities(repo: &dyn ActivityRepo) -> IndexMap<String, Activity> {
    repo.list().await
}

pub async fn enroll(repo: &dyn ActivityRepo, activity_name: &str, email: &str) -> Result<String> {
    match repo.add_participant(activity_name, email).await {
        Ok(()) => {
            info!(activity = activity_name, email, "signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = activity_name, email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn withdraw(
    repo: &dyn ActivityRepo,
    activity_name: &str,
    email: &str,
) -> Result<String> {
    match repo.remove_participant(activity_name, email).await {
        Ok(()) => {
            info!(activity = activity_name, email, "removed participant");
            Ok(format!("Removed {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = activity_name, email, "removal rejected: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::activity_repo::InMemoryActivityRepo;
    use crate::error::DirectoryError;

    #[tokio::test]
    async fn enroll_returns_confirmation() {
        let repo = InMemoryActivityRepo::seeded();
        let msg = enroll(&repo, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();
        assert_eq!(msg, "Signed up newstudent@mergington.edu for Chess Club");
    }

    #[tokio::test]
    async fn enroll_twice_conflicts() {
        let repo = InMemoryActivityRepo::seeded();
        enroll(&repo, "Chess Club", "x@mergington.edu").await.unwrap();
        assert_eq!(
            enroll(&repo, "Chess Club", "x@mergington.edu").await,
            Err(DirectoryError::AlreadySignedUp)
        );
    }

    #[tokio::test]
    async fn withdraw_returns_confirmation() {
        let repo = InMemoryActivityRepo::seeded();
        let msg = withdraw(&repo, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap();
        assert_eq!(msg, "Removed michael@mergington.edu from Chess Club");
        let list = list_activities(&repo).await;
        assert_eq!(list["Chess Club"].participants, vec!["daniel@mergington.edu"]);
    }

    #[tokio::test]
    async fn enroll_withdraw_enroll_leaves_one_entry() {
        let repo = InMemoryActivityRepo::seeded();
        let email = "testuser@mergington.edu";
        enroll(&repo, "Art Studio", email).await.unwrap();
        withdraw(&repo, "Art Studio", email).await.unwrap();
        enroll(&repo, "Art Studio", email).await.unwrap();

        let list = list_activities(&repo).await;
        let count = list["Art Studio"]
            .participants
            .iter()
            .filter(|p| p.as_str() == email)
            .count();
        assert_eq!(count, 1);
    }
}
