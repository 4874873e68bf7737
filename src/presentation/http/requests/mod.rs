use poem_openapi::Object;

use crate::presentation::models::{RoleKind, StatusKind};

#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    #[oai(validator(min_length = 1))]
    pub name: String,
    #[oai(validator(min_length = 3))]
    pub email: String,
    pub role: RoleKind,
}

#[derive(Object, Debug)]
pub struct UpdateUserRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<RoleKind>,
    pub status: Option<StatusKind>,
}
