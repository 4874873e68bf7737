use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{NewUser, SampleMetrics, User, UserPatch, UserRole, UserStats, UserStatus},
    repositories::UserRepository,
};

struct UserTable {
    users: Vec<User>,
    // high-water mark, never rewound by deletes
    next_id: u64,
}

impl UserTable {
    fn position(&self, id: u64) -> DomainResult<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or(DomainError::NotFound(id))
    }

    fn ensure_email_free(&self, email: &str, except: Option<u64>) -> DomainResult<()> {
        let email = email.trim();
        let taken = self.users.iter().any(|u| {
            Some(u.id) != except && u.is_active() && u.email.trim().eq_ignore_ascii_case(email)
        });
        if taken {
            return Err(DomainError::invalid(format!(
                "email '{email}' is already used by an active user"
            )));
        }
        Ok(())
    }

    /// Hands out the current id and advances the high-water mark.
    fn allocate_id(&mut self) -> DomainResult<u64> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| DomainError::invalid("user id space exhausted"))?;
        Ok(id)
    }
}

pub struct InMemoryUserStore {
    table: Arc<RwLock<UserTable>>,
    metrics: SampleMetrics,
}

impl InMemoryUserStore {
    pub fn new(metrics: SampleMetrics) -> Self {
        Self::from_parts(Vec::new(), 1, metrics)
    }

    pub fn with_users(users: Vec<User>, metrics: SampleMetrics) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = users.iter().find(|u| !seen.insert(u.id)) {
            return Err(DomainError::invalid(format!("duplicate seed id {}", dup.id)));
        }

        let next_id = match users.iter().map(|u| u.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                DomainError::invalid(format!("seed id {max} leaves no id for new users"))
            })?,
            None => 1,
        };
        Ok(Self::from_parts(users, next_id, metrics))
    }

    /// Store preloaded with the two demo accounts shown on the dashboard.
    pub fn seeded() -> Self {
        let users = seed_users();
        // demo ids run 1..=len
        let next_id = users.len() as u64 + 1;
        Self::from_parts(users, next_id, SampleMetrics::default())
    }

    fn from_parts(users: Vec<User>, next_id: u64, metrics: SampleMetrics) -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable { users, next_id })),
            metrics,
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "sankalp".to_string(),
            email: "sankalp@example.com".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
        },
        User {
            id: 2,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
        },
    ]
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn get(&self, id: u64) -> DomainResult<User> {
        let table = self.table.read().await;
        let index = table.position(id)?;
        Ok(table.users[index].clone())
    }

    async fn create(&self, input: NewUser) -> DomainResult<User> {
        let input = input.normalized();
        input.validate()?;

        let mut table = self.table.write().await;
        table.ensure_email_free(&input.email, None)?;

        let user = User {
            id: table.allocate_id()?,
            name: input.name,
            email: input.email,
            role: input.role,
            status: UserStatus::Active,
        };
        table.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: u64, patch: UserPatch) -> DomainResult<User> {
        let patch = patch.normalized();
        patch.validate()?;

        let mut table = self.table.write().await;
        let index = table.position(id)?;

        let mut updated = table.users[index].clone();
        updated.apply(&patch);
        let reactivated = patch.status == Some(UserStatus::Active);
        if updated.is_active() && (patch.email.is_some() || reactivated) {
            table.ensure_email_free(&updated.email, Some(id))?;
        }

        table.users[index] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> DomainResult<()> {
        let mut table = self.table.write().await;
        let index = table.position(id)?;
        table.users.remove(index);
        Ok(())
    }

    async fn stats(&self) -> DomainResult<UserStats> {
        let table = self.table.read().await;
        Ok(UserStats {
            total_users: table.users.len() as u64,
            active_users: table.users.iter().filter(|u| u.is_active()).count() as u64,
            new_signups: self.metrics.new_signups(),
            user_growth: self.metrics.user_growth().to_vec(),
        })
    }
}
