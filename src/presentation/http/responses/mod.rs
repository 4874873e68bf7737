use poem_openapi::Object;

use crate::presentation::models::{RoleKind, StatusKind};

#[derive(Object)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: RoleKind,
    pub status: StatusKind,
}

#[derive(Object)]
pub struct GrowthPointDto {
    pub month: String,
    pub users: u64,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct UserStatsDto {
    pub total_users: u64,
    pub active_users: u64,
    pub new_signups: u64,
    pub user_growth: Vec<GrowthPointDto>,
}
