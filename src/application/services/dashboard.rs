use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    application::usecases::{
        create_user::CreateUserUseCase, delete_user::DeleteUserUseCase, get_user::GetUserUseCase,
        get_user_stats::GetUserStatsUseCase, list_users::ListUsersUseCase,
        update_user::UpdateUserUseCase,
    },
    domain::{
        errors::DomainResult,
        models::{NewUser, User, UserPatch, UserStats},
        repositories::UserRepository,
        value_objects::UserFilter,
    },
};

/// The only surface the presentation layer talks to. Implemented in-process
/// by [`LocalDashboardService`] and remotely by the HTTP client, so callers
/// never change when the backend does.
#[async_trait]
pub trait DashboardService: Send + Sync {
    async fn get_user_stats(&self) -> DomainResult<UserStats>;
    async fn get_users(&self) -> DomainResult<Vec<User>>;
    async fn find_users(&self, filter: UserFilter) -> DomainResult<Vec<User>>;
    async fn get_user(&self, id: u64) -> DomainResult<User>;
    async fn create_user(&self, input: NewUser) -> DomainResult<User>;
    async fn update_user(&self, id: u64, patch: UserPatch) -> DomainResult<User>;
    async fn delete_user(&self, id: u64) -> DomainResult<()>;
}

#[derive(Clone, Debug, Default)]
pub struct LocalDashboardConfig {
    /// Delay applied before every call to mimic a remote round trip.
    pub simulated_latency: Duration,
}

pub struct LocalDashboardService {
    stats_usecase: GetUserStatsUseCase,
    list_users_usecase: ListUsersUseCase,
    get_user_usecase: GetUserUseCase,
    create_user_usecase: CreateUserUseCase,
    update_user_usecase: UpdateUserUseCase,
    delete_user_usecase: DeleteUserUseCase,
    config: LocalDashboardConfig,
}

impl LocalDashboardService {
    pub fn new(repo: Arc<dyn UserRepository>, config: LocalDashboardConfig) -> Self {
        Self {
            stats_usecase: GetUserStatsUseCase::new(repo.clone()),
            list_users_usecase: ListUsersUseCase::new(repo.clone()),
            get_user_usecase: GetUserUseCase::new(repo.clone()),
            create_user_usecase: CreateUserUseCase::new(repo.clone()),
            update_user_usecase: UpdateUserUseCase::new(repo.clone()),
            delete_user_usecase: DeleteUserUseCase::new(repo),
            config,
        }
    }

    async fn round_trip(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }
}

#[async_trait]
impl DashboardService for LocalDashboardService {
    async fn get_user_stats(&self) -> DomainResult<UserStats> {
        self.round_trip().await;
        self.stats_usecase.execute().await
    }

    async fn get_users(&self) -> DomainResult<Vec<User>> {
        self.round_trip().await;
        self.list_users_usecase.execute(&UserFilter::default()).await
    }

    async fn find_users(&self, filter: UserFilter) -> DomainResult<Vec<User>> {
        self.round_trip().await;
        self.list_users_usecase.execute(&filter).await
    }

    async fn get_user(&self, id: u64) -> DomainResult<User> {
        self.round_trip().await;
        self.get_user_usecase.execute(id).await
    }

    async fn create_user(&self, input: NewUser) -> DomainResult<User> {
        self.round_trip().await;
        self.create_user_usecase.execute(input).await
    }

    async fn update_user(&self, id: u64, patch: UserPatch) -> DomainResult<User> {
        self.round_trip().await;
        self.update_user_usecase.execute(id, patch).await
    }

    async fn delete_user(&self, id: u64) -> DomainResult<()> {
        self.round_trip().await;
        self.delete_user_usecase.execute(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        errors::DomainError,
        models::{UserRole, UserStatus},
    };
    use crate::infrastructure::repositories::InMemoryUserStore;

    fn service() -> LocalDashboardService {
        LocalDashboardService::new(
            Arc::new(InMemoryUserStore::seeded()),
            LocalDashboardConfig::default(),
        )
    }

    fn bob() -> NewUser {
        NewUser::new("Bob", "bob@x.com", UserRole::User)
    }

    #[tokio::test]
    async fn overview_scenario() {
        let service = service();

        let stats = service.get_user_stats().await.unwrap();
        assert_eq!((stats.total_users, stats.active_users), (2, 2));

        let bob = service.create_user(bob()).await.unwrap();
        assert!(bob.id != 1 && bob.id != 2);
        assert_eq!(bob.status, UserStatus::Active);
        assert_eq!(service.get_user_stats().await.unwrap().total_users, 3);

        service.delete_user(bob.id).await.unwrap();
        let users = service.get_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.id != bob.id));
    }

    #[tokio::test]
    async fn created_user_appears_exactly_once() {
        let service = service();
        let created = service.create_user(bob()).await.unwrap();

        let matches: Vec<User> = service
            .get_users()
            .await
            .unwrap()
            .into_iter()
            .filter(|u| u.name == "Bob" && u.email == "bob@x.com" && u.role == UserRole::User)
            .collect();

        assert_eq!(matches, vec![created]);
    }

    #[tokio::test]
    async fn role_update_keeps_other_fields() {
        let service = service();
        let before = service.get_user(2).await.unwrap();

        service
            .update_user(2, UserPatch::role(UserRole::Admin))
            .await
            .unwrap();

        let after = service.get_user(2).await.unwrap();
        assert_eq!(after.role, UserRole::Admin);
        assert_eq!(
            (after.id, &after.name, &after.email, after.status),
            (before.id, &before.name, &before.email, before.status)
        );
    }

    #[tokio::test]
    async fn empty_patch_still_reports_missing_id() {
        let service = service();
        assert_eq!(
            service.update_user(7, UserPatch::default()).await,
            Err(DomainError::NotFound(7))
        );
        assert_eq!(service.update_user(1, UserPatch::default()).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn failed_delete_leaves_users_unchanged() {
        let service = service();
        let before = service.get_users().await.unwrap();

        let err = service.delete_user(42).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(service.get_users().await.unwrap(), before);
    }

    #[tokio::test]
    async fn find_users_filters_by_role() {
        let service = service();
        let admins = service
            .find_users(UserFilter::default().with_role(UserRole::Admin))
            .await
            .unwrap();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].name, "sankalp");
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_is_applied() {
        let service = LocalDashboardService::new(
            Arc::new(InMemoryUserStore::seeded()),
            LocalDashboardConfig {
                simulated_latency: Duration::from_millis(250),
            },
        );

        let started = tokio::time::Instant::now();
        service.get_users().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
