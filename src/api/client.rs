//! HTTP client for the case-tutoring backend.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests to the auth and chat endpoints. Every call runs through the
//! middleware chain: bearer injection on the way out, session-expiry
//! handling on the way back.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::auth::{Session, TokenStore};
use crate::config::Config;
use crate::models::{ChatReply, ChatTurn, CurrentUser, LoginResponse, RegisterRequest, RegisteredUser};
use crate::nav::NavigationSink;

use super::middleware::{BearerAuth, ExpiryGuard, RequestHook, ResponseHook};
use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow model-backed replies while still failing eventually.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the tutoring backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl ApiClient {
    /// Create a client bound to the configured base URL, with the given
    /// credential store and navigation sink wired into the middleware chain.
    pub fn new(
        config: &Config,
        store: Arc<dyn TokenStore>,
        nav: Arc<dyn NavigationSink>,
    ) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(default_headers)
            .build()?;

        let session = Session::new(store);
        let request_hooks: Vec<Arc<dyn RequestHook>> =
            vec![Arc::new(BearerAuth::new(session.clone()))];
        let response_hooks: Vec<Arc<dyn ResponseHook>> =
            vec![Arc::new(ExpiryGuard::new(session.clone(), nav))];

        info!(base_url = %config.base_url, "api client configured");

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session,
            request_hooks,
            response_hooks,
        })
    }

    /// Session state backing this client
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run the middleware chain around one transport round trip and decode
    /// the body on success.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let mut headers = HeaderMap::new();
        for hook in &self.request_hooks {
            hook.apply(&mut headers)?;
        }

        let response = request.headers(headers).send().await?;

        let status = response.status();
        for hook in &self.response_hooks {
            hook.observe(status);
        }

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        self.execute(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        self.execute(self.client.post(self.url(path)).json(body))
            .await
    }

    // ===== Auth Endpoints =====

    /// Register a new student account
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        self.post("/api/auth/register", request).await
    }

    /// Login with student credentials. On success the credential and
    /// identity fields are persisted together to the store.
    pub async fn login(
        &self,
        student_id: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({
            "student_id": student_id,
            "password": password,
        });
        let response: LoginResponse = self.post("/api/auth/login", &body).await?;
        self.session.save(&response);
        Ok(response)
    }

    /// Get the current user record (requires a stored credential)
    pub async fn me(&self) -> Result<CurrentUser, ApiError> {
        self.get("/api/auth/me").await
    }

    /// Clear the stored session. Local only; no request is sent.
    pub fn logout(&self) {
        self.session.clear();
    }

    // ===== Chat Endpoints =====

    /// Send a chat message within a case
    pub async fn send_message(&self, message: &str, case_id: &str) -> Result<ChatReply, ApiError> {
        let body = serde_json::json!({
            "message": message,
            "case_id": case_id,
        });
        self.post("/api/chat/send", &body).await
    }

    /// Fetch the stored chat history for a student and case, oldest first
    pub async fn history(
        &self,
        student_id: &str,
        case_id: &str,
    ) -> Result<Vec<ChatTurn>, ApiError> {
        self.get(&format!("/api/chat/history/{}/{}", student_id, case_id))
            .await
    }
}
