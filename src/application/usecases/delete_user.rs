use std::sync::Arc;

use crate::domain::{errors::DomainResult, repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: u64) -> DomainResult<()> {
        self.repo.delete(id).await.inspect_err(|err| {
            tracing::warn!(user_id = id, error = %err, "user delete rejected");
        })?;
        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}
