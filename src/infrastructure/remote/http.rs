use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    application::services::DashboardService,
    config::RemoteConfig,
    domain::{
        errors::{DomainError, DomainResult},
        models::{NewUser, User, UserPatch, UserStats},
        value_objects::UserFilter,
    },
};

/// [`DashboardService`] backed by the JSON API served from `presentation::http`.
pub struct HttpDashboardClient {
    http: Client,
    base_url: String,
}

impl HttpDashboardClient {
    pub fn new(config: RemoteConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .user_agent("dashboard-client")
            .timeout(config.timeout)
            .build()
            .map_err(|err| DomainError::unavailable(format!("failed to build client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Builds a client from `DASHBOARD_BASE_URL` and `DASHBOARD_TIMEOUT_MS`.
    pub fn from_env() -> DomainResult<Self> {
        let config = RemoteConfig::try_parse().map_err(DomainError::invalid)?;
        Self::new(config)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_url(&self, id: u64) -> String {
        self.url(&format!("/users/{id}"))
    }

    /// Sends the request and classifies every non-2xx answer. `id` is the
    /// record the call targets, so a 404 can be reported as `NotFound`.
    async fn send(&self, request: RequestBuilder, id: Option<u64>) -> DomainResult<Response> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!(error = %err, "dashboard backend unreachable");
            DomainError::unavailable(err.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => DomainError::NotFound(id),
            (StatusCode::BAD_REQUEST, _) => DomainError::InvalidInput(body),
            _ => DomainError::unavailable(format!("backend answered {status}: {body}")),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
        response
            .json()
            .await
            .map_err(|err| DomainError::unavailable(format!("undecodable response: {err}")))
    }
}

#[async_trait]
impl DashboardService for HttpDashboardClient {
    async fn get_user_stats(&self) -> DomainResult<UserStats> {
        let response = self.send(self.http.get(self.url("/stats")), None).await?;
        Self::decode(response).await
    }

    async fn get_users(&self) -> DomainResult<Vec<User>> {
        self.find_users(UserFilter::default()).await
    }

    async fn find_users(&self, filter: UserFilter) -> DomainResult<Vec<User>> {
        let mut query = Vec::new();
        if let Some(search) = filter.search {
            query.push(("search", search));
        }
        if let Some(role) = filter.role {
            query.push(("role", role.as_str().to_string()));
        }

        let request = self.http.get(self.url("/users")).query(&query);
        let response = self.send(request, None).await?;
        Self::decode(response).await
    }

    async fn get_user(&self, id: u64) -> DomainResult<User> {
        let response = self.send(self.http.get(self.user_url(id)), Some(id)).await?;
        Self::decode(response).await
    }

    async fn create_user(&self, input: NewUser) -> DomainResult<User> {
        let request = self.http.post(self.url("/users")).json(&input);
        let response = self.send(request, None).await?;
        Self::decode(response).await
    }

    async fn update_user(&self, id: u64, patch: UserPatch) -> DomainResult<User> {
        let request = self.http.patch(self.user_url(id)).json(&patch);
        let response = self.send(request, Some(id)).await?;
        Self::decode(response).await
    }

    async fn delete_user(&self, id: u64) -> DomainResult<()> {
        self.send(self.http.delete(self.user_url(id)), Some(id))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn joins_paths_onto_trimmed_base() {
        let client = HttpDashboardClient::new(RemoteConfig::new(
            "http://127.0.0.1:3000/api/",
            Duration::from_secs(1),
        ))
        .unwrap();

        assert_eq!(client.url("/stats"), "http://127.0.0.1:3000/api/stats");
        assert_eq!(client.user_url(7), "http://127.0.0.1:3000/api/users/7");
    }

    #[test]
    fn from_env_without_base_url_is_invalid_input() {
        if std::env::var("DASHBOARD_BASE_URL").is_ok() {
            return;
        }
        assert!(matches!(
            HttpDashboardClient::from_env(),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
