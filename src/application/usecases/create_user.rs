use std::sync::Arc;

use crate::domain::{
    errors::DomainResult,
    models::{NewUser, User},
    repositories::UserRepository,
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: NewUser) -> DomainResult<User> {
        let user = self.repo.create(input).await.inspect_err(|err| {
            tracing::warn!(error = %err, "user creation rejected");
        })?;
        tracing::info!(user_id = user.id, role = user.role.as_str(), "user created");
        Ok(user)
    }
}
