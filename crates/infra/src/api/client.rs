//! User-directory API client
//!
//! HTTP implementation of the `UserDirectoryApi` port with bearer-token
//! authentication, per-request timeouts, and status-code error mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use stagelink_core::{SavePayload, SaveResponse, UserDirectoryApi};
use stagelink_domain::Result as DomainResult;
use tracing::{debug, info, instrument};

use super::errors::ApiError;

/// Configuration for the user-directory client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API (e.g., "https://api.stagelink.app/v1")
    pub base_url: String,
    /// Bearer token for authenticated requests
    pub auth_token: Option<String>,
    /// Timeout for API requests
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.stagelink.app/v1".to_string(),
            auth_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the user-directory API
pub struct UserDirectoryClient {
    http: reqwest::Client,
    config: ApiClientConfig,
}

impl UserDirectoryClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        // The per-request tokio timeout in `execute` is the single
        // timeout authority; a builder-level timeout would race it and
        // misreport timeouts as network errors.
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.http.request(method, url).header("Content-Type", "application/json");
        if let Some(token) = &self.config.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        request
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let timeout = self.config.timeout;
        let response = match tokio::time::timeout(timeout, request.send()).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(ApiError::Network(err.to_string())),
            Err(_) => return Err(ApiError::Timeout(timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, path, body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("failed to parse response: {e}")))
    }

    /// Execute a GET request
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET request");
        let result = self.execute(self.request(Method::GET, path), path).await?;
        info!(path = %path, "GET request successful");
        Ok(result)
    }

    /// Execute a PUT request with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R, ApiError> {
        debug!("PUT request");
        let result = self.execute(self.request(Method::PUT, path).json(body), path).await?;
        info!(path = %path, "PUT request successful");
        Ok(result)
    }
}

fn map_status_error(status: StatusCode, path: &str, body: String) -> ApiError {
    let message = if body.is_empty() {
        format!("{path} returned status {status}")
    } else {
        format!("{path} returned status {status}: {body}")
    };

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        ApiError::Auth(message)
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        ApiError::RateLimit(message)
    } else if status.is_server_error() {
        ApiError::Server(message)
    } else if status.is_client_error() {
        ApiError::Client(message)
    } else {
        ApiError::Network(message)
    }
}

#[async_trait]
impl UserDirectoryApi for UserDirectoryClient {
    async fn fetch_me(&self) -> DomainResult<Value> {
        self.get("/me").await.map_err(Into::into)
    }

    async fn update_profile(&self, payload: &SavePayload) -> DomainResult<SaveResponse> {
        self.put("/users/me", payload).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use stagelink_domain::{FlatUser, StagelinkError, TalentProfile};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> UserDirectoryClient {
        let config = ApiClientConfig {
            base_url: server.uri(),
            auth_token: Some("test-token".to_string()),
            ..Default::default()
        };
        UserDirectoryClient::new(config).expect("client")
    }

    fn sample_payload() -> SavePayload {
        SavePayload {
            talent_profiles: vec![TalentProfile::new("Actor")],
            active_profile_id: "tp-1".to_string(),
            record: FlatUser::default(),
        }
    }

    #[tokio::test]
    async fn test_fetch_me_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Asha Rao",
                "talentProfiles": []
            })))
            .mount(&server)
            .await;

        let raw = client_for(&server).fetch_me().await.expect("fetch");
        assert_eq!(raw["name"], "Asha Rao");
    }

    #[tokio::test]
    async fn test_fetch_me_unauthorized_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_me().await.expect_err("rejected");
        assert!(matches!(err, StagelinkError::Api(_)));
    }

    #[tokio::test]
    async fn test_fetch_me_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result: Result<Value, ApiError> = client_for(&server).get("/me").await;
        assert!(matches!(result.unwrap_err(), ApiError::Server(_)));
    }

    #[tokio::test]
    async fn test_update_profile_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "user": { "name": "Asha Rao" }
            })))
            .mount(&server)
            .await;

        let response =
            client_for(&server).update_profile(&sample_payload()).await.expect("update");
        assert!(response.success);
        assert!(response.user.is_some());
    }

    #[tokio::test]
    async fn test_update_profile_carries_success_false_through() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "profile type missing"
            })))
            .mount(&server)
            .await;

        let response =
            client_for(&server).update_profile(&sample_payload()).await.expect("transport ok");
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("profile type missing"));
    }

    #[tokio::test]
    async fn test_slow_response_maps_to_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "name": "Asha Rao" }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = ApiClientConfig {
            base_url: server.uri(),
            auth_token: None,
            timeout: Duration::from_millis(100),
        };
        let client = UserDirectoryClient::new(config).expect("client");

        let result: Result<Value, ApiError> = client.get("/me").await;
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::Timeout(_)));
        assert!(err.should_retry());
    }

    #[tokio::test]
    async fn test_rate_limit_is_retryable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let result: Result<Value, ApiError> = client_for(&server).get("/me").await;
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::RateLimit(_)));
        assert!(err.should_retry());
    }
}
