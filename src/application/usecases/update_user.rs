use std::sync::Arc;

use crate::domain::{
    errors::DomainResult,
    models::{User, UserPatch},
    repositories::UserRepository,
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: u64, patch: UserPatch) -> DomainResult<User> {
        if patch.is_empty() {
            // nothing to merge, still report a missing id
            return self.repo.get(id).await;
        }

        let user = self.repo.update(id, patch).await.inspect_err(|err| {
            tracing::warn!(user_id = id, error = %err, "user update rejected");
        })?;
        tracing::info!(user_id = id, status = user.status.as_str(), "user updated");
        Ok(user)
    }
}
