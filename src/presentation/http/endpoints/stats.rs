use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    mappers::{map_error, map_stats},
    responses::UserStatsDto,
};

#[derive(Clone)]
pub struct StatsEndpoints {
    state: Arc<ApiState>,
}

impl StatsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl StatsEndpoints {
    #[oai(path = "/stats", method = "get", tag = EndpointsTags::Stats)]
    pub async fn get_user_stats(&self) -> poem::Result<Json<UserStatsDto>> {
        let stats = self
            .state
            .service
            .get_user_stats()
            .await
            .map_err(map_error)?;

        Ok(Json(map_stats(&stats)))
    }
}
