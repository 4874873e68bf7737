use poem_openapi::Enum;

use crate::domain::models::{UserRole, UserStatus};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoleKind {
    #[oai(rename = "admin")]
    Admin,
    #[oai(rename = "user")]
    User,
}

impl From<RoleKind> for UserRole {
    fn from(value: RoleKind) -> Self {
        match value {
            RoleKind::Admin => UserRole::Admin,
            RoleKind::User => UserRole::User,
        }
    }
}

impl From<UserRole> for RoleKind {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Admin => RoleKind::Admin,
            UserRole::User => RoleKind::User,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum StatusKind {
    #[oai(rename = "active")]
    Active,
    #[oai(rename = "inactive")]
    Inactive,
}

impl From<StatusKind> for UserStatus {
    fn from(value: StatusKind) -> Self {
        match value {
            StatusKind::Active => UserStatus::Active,
            StatusKind::Inactive => UserStatus::Inactive,
        }
    }
}

impl From<UserStatus> for StatusKind {
    fn from(value: UserStatus) -> Self {
        match value {
            UserStatus::Active => StatusKind::Active,
            UserStatus::Inactive => StatusKind::Inactive,
        }
    }
}
