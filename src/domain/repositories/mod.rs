use async_trait::async_trait;

use crate::domain::{
    errors::DomainResult,
    models::{NewUser, User, UserPatch, UserStats},
};

/// Exclusive owner of the user collection. Every method is atomic with
/// respect to every other call on the same repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of all users in insertion order.
    async fn list(&self) -> DomainResult<Vec<User>>;
    async fn get(&self, id: u64) -> DomainResult<User>;
    async fn create(&self, input: NewUser) -> DomainResult<User>;
    async fn update(&self, id: u64, patch: UserPatch) -> DomainResult<User>;
    async fn delete(&self, id: u64) -> DomainResult<()>;
    async fn stats(&self) -> DomainResult<UserStats>;
}
