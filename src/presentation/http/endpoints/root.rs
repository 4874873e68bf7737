use std::sync::Arc;

use poem::Route;
use poem_openapi::{OpenApiService, Tags};

use crate::{
    application::services::DashboardService,
    presentation::http::endpoints::{
        health::HealthEndpoints, stats::StatsEndpoints, users::UsersEndpoints,
    },
};

#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<dyn DashboardService>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Stats,
    Users,
}

/// JSON API under `/api`, Swagger UI at `/`.
pub fn build_app(service: Arc<dyn DashboardService>, server_url: &str) -> Route {
    let state = Arc::new(ApiState { service });

    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            StatsEndpoints::new(state.clone()),
            UsersEndpoints::new(state),
        ),
        "Dashboard API",
        "0.1.0",
    )
    .server(format!("{server_url}/api"));
    let ui = api_service.swagger_ui();

    Route::new().nest("/api", api_service).nest("/", ui)
}
