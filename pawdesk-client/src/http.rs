//! HTTP client for the booking API
//!
//! Carries the session's bearer token on every call and performs exactly
//! one refresh-and-retry cycle when the server answers 401. Session
//! state is shared across clones so a refreshed token is seen by all of
//! them.

use std::sync::Arc;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::api::unwrap_data;
use crate::{ClientConfig, ClientError, ClientResult};
use shared::client::{
    CurrentUserResponse, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse,
};
use shared::error::ApiResponse;

/// Session state shared by all clones of the client
#[derive(Debug, Default)]
struct Session {
    token: Option<String>,
    refresh_token: Option<String>,
}

/// HTTP client for the booking API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Arc<RwLock<Session>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: Arc::new(RwLock::new(Session {
                token: config.token.clone(),
                refresh_token: config.refresh_token.clone(),
            })),
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the current bearer token
    pub async fn token(&self) -> Option<String> {
        self.session.read().await.token.clone()
    }

    /// Whether a session token is currently held
    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.token.is_some()
    }

    /// Build authorization header value
    async fn auth_header(&self) -> Option<String> {
        self.session
            .read()
            .await
            .token
            .as_ref()
            .map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request::<T, ()>(Method::POST, path, None).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Issue a request, refreshing the session once on 401
    async fn request<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        match self.send_once(method.clone(), path, body).await {
            Err(ClientError::Unauthorized) => {
                tracing::debug!(path, "401 received, refreshing session");
                self.refresh().await?;
                self.send_once(method, path, body).await
            }
            other => other,
        }
    }

    async fn send_once<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.client.request(method, &url);

        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(auth) = self.auth_header().await {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            if status == StatusCode::UNAUTHORIZED {
                return Err(ClientError::Unauthorized);
            }
            // Prefer the server-provided envelope message when present
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
                && let Some(code) = envelope.code
                && code != 0
            {
                return Err(ClientError::Api {
                    code,
                    message: envelope.message,
                    details: envelope.details,
                });
            }
            return match status {
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with username and password, storing the session tokens
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let resp: ApiResponse<LoginResponse> = self.post("api/auth/login", &request).await?;
        let data = unwrap_data(resp)?;

        let mut session = self.session.write().await;
        session.token = Some(data.token.clone());
        session.refresh_token = data.refresh_token.clone();
        drop(session);

        Ok(data)
    }

    /// Refresh the session token.
    ///
    /// Used once per failed request; any refresh failure surfaces as
    /// [`ClientError::Unauthorized`] so callers see a single
    /// authentication failure, not a refresh-protocol detail.
    pub async fn refresh(&self) -> ClientResult<()> {
        let refresh_token = self.session.read().await.refresh_token.clone();
        let Some(refresh_token) = refresh_token else {
            return Err(ClientError::Unauthorized);
        };

        let request = RefreshRequest { refresh_token };
        let resp: ApiResponse<RefreshResponse> = match self
            .send_once(Method::POST, "api/auth/refresh", Some(&request))
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%err, "token refresh failed");
                return Err(ClientError::Unauthorized);
            }
        };
        let data = unwrap_data(resp).map_err(|_| ClientError::Unauthorized)?;

        let mut session = self.session.write().await;
        session.token = Some(data.token);
        if data.refresh_token.is_some() {
            session.refresh_token = data.refresh_token;
        }
        Ok(())
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<CurrentUserResponse> {
        let resp: ApiResponse<CurrentUserResponse> = self.get("api/auth/me").await?;
        unwrap_data(resp)
    }

    /// Logout and clear the session
    pub async fn logout(&self) -> ClientResult<()> {
        let _resp: ApiResponse<()> = self.post_empty("api/auth/logout").await?;
        let mut session = self.session.write().await;
        session.token = None;
        session.refresh_token = None;
        Ok(())
    }
}
