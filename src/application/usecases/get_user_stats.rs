use std::sync::Arc;

use crate::domain::{errors::DomainResult, models::UserStats, repositories::UserRepository};

pub struct GetUserStatsUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserStatsUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> DomainResult<UserStats> {
        let stats = self.repo.stats().await?;
        tracing::debug!(
            total = stats.total_users,
            active = stats.active_users,
            "computed user stats"
        );
        Ok(stats)
    }
}
