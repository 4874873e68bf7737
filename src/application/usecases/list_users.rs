use std::sync::Arc;

use crate::domain::{
    errors::DomainResult, models::User, repositories::UserRepository, value_objects::UserFilter,
};

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: &UserFilter) -> DomainResult<Vec<User>> {
        let users = filter.apply(self.repo.list().await?);
        tracing::debug!(count = users.len(), ?filter, "listed users");
        Ok(users)
    }
}
