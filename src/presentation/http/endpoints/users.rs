use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use crate::{
    domain::value_objects::UserFilter,
    presentation::{
        http::{
            endpoints::root::{ApiState, EndpointsTags},
            mappers::{map_error, map_new_user, map_patch, map_user},
            requests::{CreateUserRequestDto, UpdateUserRequestDto},
            responses::UserDto,
        },
        models::RoleKind,
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(
        &self,
        search: Query<Option<String>>,
        role: Query<Option<RoleKind>>,
    ) -> PoemResult<Json<Vec<UserDto>>> {
        let filter = UserFilter {
            search: search.0,
            role: role.0.map(Into::into),
        };

        let users = self
            .state
            .service
            .find_users(filter)
            .await
            .map_err(map_error)?;

        Ok(Json(users.iter().map(map_user).collect()))
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<u64>) -> PoemResult<Json<UserDto>> {
        let user = self
            .state
            .service
            .get_user(id.0)
            .await
            .map_err(map_error)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        request: Json<CreateUserRequestDto>,
    ) -> PoemResult<Json<UserDto>> {
        let user = self
            .state
            .service
            .create_user(map_new_user(&request))
            .await
            .map_err(map_error)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id", method = "patch", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<u64>,
        request: Json<UpdateUserRequestDto>,
    ) -> PoemResult<Json<UserDto>> {
        let user = self
            .state
            .service
            .update_user(id.0, map_patch(&request))
            .await
            .map_err(map_error)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<u64>) -> PoemResult<()> {
        self.state
            .service
            .delete_user(id.0)
            .await
            .map_err(map_error)
    }
}
