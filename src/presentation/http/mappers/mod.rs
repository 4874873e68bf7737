use poem::http::StatusCode;

use crate::{
    domain::{
        errors::DomainError,
        models::{NewUser, User, UserPatch, UserStats},
    },
    presentation::http::{
        requests::{CreateUserRequestDto, UpdateUserRequestDto},
        responses::{GrowthPointDto, UserDto, UserStatsDto},
    },
};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.into(),
        status: user.status.into(),
    }
}

pub fn map_stats(stats: &UserStats) -> UserStatsDto {
    UserStatsDto {
        total_users: stats.total_users,
        active_users: stats.active_users,
        new_signups: stats.new_signups,
        user_growth: stats
            .user_growth
            .iter()
            .map(|point| GrowthPointDto {
                month: point.month.clone(),
                users: point.users,
            })
            .collect(),
    }
}

pub fn map_new_user(request: &CreateUserRequestDto) -> NewUser {
    NewUser::new(request.name.clone(), request.email.clone(), request.role.into())
}

pub fn map_patch(request: &UpdateUserRequestDto) -> UserPatch {
    UserPatch {
        name: request.name.clone(),
        email: request.email.clone(),
        role: request.role.map(Into::into),
        status: request.status.map(Into::into),
    }
}

/// Invalid input answers with the bare reason so remote callers can surface it as-is.
pub fn map_error(err: DomainError) -> poem::Error {
    match err {
        DomainError::NotFound(_) => poem::Error::from_string(err.to_string(), StatusCode::NOT_FOUND),
        DomainError::InvalidInput(reason) => {
            poem::Error::from_string(reason, StatusCode::BAD_REQUEST)
        }
        DomainError::Unavailable(_) => {
            poem::Error::from_string(err.to_string(), StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
