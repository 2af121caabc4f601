//! Main OtoPOS gateway client with builder pattern.
//!
//! The single component through which every backend HTTP call passes:
//! attaches the bearer credential, unwraps the uniform response envelope,
//! and reacts to 401 responses by invalidating the session.

use crate::{
    auth::AuthProvider,
    credentials::{CredentialStore, MemoryCredentialStore},
    error::{OtoLinkError, Result},
    event_handlers::EventHandlers,
    models::{ApiEnvelope, ChangePasswordRequest, HealthCheckResponse, LoginRequest, LoginResponse, User},
    timeouts::OtoLinkTimeouts,
};
use log::{debug, warn};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use url::Url;

/// Body of an outgoing request.
pub(crate) enum RequestBody {
    None,
    Json(serde_json::Value),
    Multipart(reqwest::multipart::Form),
}

/// Main OtoPOS client.
///
/// Use [`OtoLinkClientBuilder`] to construct instances with custom
/// configuration. The client is shared by reference (`Arc`) between the
/// session store and the page-level callers; all methods take `&self`.
///
/// # Examples
///
/// ```rust,no_run
/// use oto_link::{LoginRequest, OtoLinkClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OtoLinkClient::builder()
///     .base_url("http://localhost:8080/api/v1")
///     .build()?;
///
/// let login = client.login(&LoginRequest::new("admin", "secret")).await?;
/// println!("logged in as {}", login.user.username);
///
/// let customers = client.list_customers(1, 20, None).await?;
/// println!("{} customers total", customers.pagination.total);
/// # Ok(())
/// # }
/// ```
pub struct OtoLinkClient {
    base_url: String,
    health_url: String,
    http_client: reqwest::Client,
    token: RwLock<Option<String>>,
    store: Arc<dyn CredentialStore>,
    handlers: RwLock<EventHandlers>,
    timeouts: OtoLinkTimeouts,
}

impl OtoLinkClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> OtoLinkClientBuilder {
        OtoLinkClientBuilder::new()
    }

    /// The configured API base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The liveness endpoint URL.
    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    /// Get the configured timeouts
    pub fn timeouts(&self) -> &OtoLinkTimeouts {
        &self.timeouts
    }

    /// `true` when a credential is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.current_token().is_some()
    }

    /// Persist a bearer token and apply it to all future requests
    /// immediately. Requests already in flight keep the token they were
    /// issued with.
    pub fn set_credential(&self, token: &str) -> Result<()> {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
        self.store.store(token)
    }

    /// Remove the credential from memory and durable storage. Idempotent.
    pub fn clear_credential(&self) -> Result<()> {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        self.store.clear()
    }

    /// Register an additional session-invalidated listener after
    /// construction. The session store registers itself this way.
    pub fn on_session_invalidated(&self, f: impl Fn() + Send + Sync + 'static) {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let updated = std::mem::take(&mut *handlers).on_session_invalidated(f);
        *handlers = updated;
    }

    // ---------------------------------------------------------------
    // Authentication endpoints
    // ---------------------------------------------------------------

    /// Login with username and password to obtain a bearer token.
    ///
    /// On success the returned token is persisted and attached to every
    /// subsequent request. Bad credentials surface as
    /// [`OtoLinkError::AuthError`] with the backend's message.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        debug!("[LOGIN] Authenticating user '{}'", credentials.username);
        let start = Instant::now();
        let login: LoginResponse = self.post("/auth/login", credentials).await?;
        self.set_credential(&login.token)?;
        debug!(
            "[LOGIN] Authenticated user '{}' in {:?}",
            login.user.username,
            start.elapsed()
        );
        Ok(login)
    }

    /// Fetch the profile of the currently authenticated user.
    pub async fn get_profile(&self) -> Result<User> {
        self.get("/auth/profile", None).await
    }

    /// Change the current user's password. The backend acknowledges with a
    /// message-only envelope.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.ack(Method::POST, "/auth/change-password", Some(body))
            .await
    }

    /// Check server liveness.
    ///
    /// Uses the separate unauthenticated `/health` URL outside the API
    /// prefix; the response is a bare JSON object, not enveloped.
    pub async fn health_check(&self) -> Result<HealthCheckResponse> {
        debug!("[HEALTH_CHECK] GET {}", self.health_url);
        let start = Instant::now();
        let response = self.http_client.get(&self.health_url).send().await?;
        let status = response.status();
        debug!(
            "[HEALTH_CHECK] status={} duration_ms={}",
            status,
            start.elapsed().as_millis()
        );
        if !status.is_success() {
            return Err(OtoLinkError::ApiError {
                status_code: status.as_u16(),
                message: "health check failed".to_string(),
            });
        }
        Ok(response.json::<HealthCheckResponse>().await?)
    }

    // ---------------------------------------------------------------
    // Core request path
    // ---------------------------------------------------------------

    fn current_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn with_handlers<R>(&self, f: impl FnOnce(&EventHandlers) -> R) -> R {
        let handlers = self
            .handlers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&handlers)
    }

    /// Send one request through the uniform path: token attachment, debug
    /// hooks, transport error mapping, 401 invalidation and non-success
    /// status handling. Returns the raw response only for success statuses.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        query: Option<&[(&str, String)]>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http_client.request(method.clone(), &url);
        if let Some(q) = query {
            builder = builder.query(&q);
        }
        builder = match body {
            RequestBody::None => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };
        builder = AuthProvider::from_token(self.current_token()).apply_to_request(builder);

        self.with_handlers(|h| h.emit_request(method.as_str(), path));
        let start = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        debug!(
            "[GATEWAY] {} {} -> status={} duration_ms={}",
            method,
            path,
            status,
            start.elapsed().as_millis()
        );
        self.with_handlers(|h| h.emit_response(status.as_u16(), path));

        if status == StatusCode::UNAUTHORIZED {
            return Err(self.handle_unauthorized(response).await);
        }

        if !status.is_success() {
            let status_code = status.as_u16();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| {
                    if text.is_empty() {
                        "Request failed".to_string()
                    } else {
                        text
                    }
                });
            warn!(
                "[GATEWAY] {} {} failed: status={} message=\"{}\"",
                method, path, status_code, message
            );
            return Err(OtoLinkError::ApiError {
                status_code,
                message,
            });
        }

        Ok(response)
    }

    /// 401 handling: clear the credential (memory and durable store) and
    /// notify listeners, then build the error for the caller. Runs exactly
    /// once per 401 response, whatever endpoint triggered it.
    async fn handle_unauthorized(&self, response: reqwest::Response) -> OtoLinkError {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        if let Err(err) = self.store.clear() {
            warn!("[GATEWAY] Failed to clear stored credential: {}", err);
        }
        self.with_handlers(|h| h.emit_session_invalidated());
        debug!("[GATEWAY] Session invalidated (401)");

        let message = response
            .json::<ApiEnvelope<serde_json::Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| "Unauthorized".to_string());
        OtoLinkError::AuthError(message)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status_code = response.status().as_u16();
        let envelope: ApiEnvelope<T> = response.json().await?;
        envelope.into_data(status_code)
    }

    /// GET a payload-carrying endpoint.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<T> {
        let response = self
            .dispatch(Method::GET, path, RequestBody::None, query)
            .await?;
        Self::decode(response).await
    }

    /// POST a JSON body, expecting a payload back.
    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let value = serde_json::to_value(body)?;
        let response = self
            .dispatch(Method::POST, path, RequestBody::Json(value), None)
            .await?;
        Self::decode(response).await
    }

    /// PUT a JSON body, expecting a payload back.
    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let value = serde_json::to_value(body)?;
        let response = self
            .dispatch(Method::PUT, path, RequestBody::Json(value), None)
            .await?;
        Self::decode(response).await
    }

    /// Acknowledgement-only call: the backend answers these with a
    /// message-only envelope and no `data` (deletes, status flips,
    /// password change). HTTP success is the success criterion.
    pub(crate) async fn ack(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        let body = match body {
            Some(value) => RequestBody::Json(value),
            None => RequestBody::None,
        };
        let response = self.dispatch(method, path, body, None).await?;
        // Drain the acknowledgement envelope; its message is informational.
        let _ = response.json::<ApiEnvelope<serde_json::Value>>().await;
        Ok(())
    }

    /// Multipart file upload through the same dispatch path.
    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<T> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);
        let response = self
            .dispatch(Method::POST, path, RequestBody::Multipart(form), None)
            .await?;
        Self::decode(response).await
    }
}

impl std::fmt::Debug for OtoLinkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtoLinkClient")
            .field("base_url", &self.base_url)
            .field("health_url", &self.health_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Builder for configuring [`OtoLinkClient`] instances.
pub struct OtoLinkClientBuilder {
    base_url: Option<String>,
    health_url: Option<String>,
    timeouts: OtoLinkTimeouts,
    store: Option<Arc<dyn CredentialStore>>,
    handlers: EventHandlers,
}

impl OtoLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            health_url: None,
            timeouts: OtoLinkTimeouts::default(),
            store: None,
            handlers: EventHandlers::new(),
        }
    }

    /// Set the API base URL, e.g. `http://localhost:8080/api/v1`. Required.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the liveness URL. Defaults to `<origin>/health` derived
    /// from the base URL.
    pub fn health_url(mut self, url: impl Into<String>) -> Self {
        self.health_url = Some(url.into());
        self
    }

    /// Set the total request timeout (default 10 seconds).
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeouts.request_timeout = timeout;
        self
    }

    /// Set the full timeout configuration.
    pub fn timeouts(mut self, timeouts: OtoLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Set the durable credential store. Defaults to an in-memory store
    /// (no persistence across restarts).
    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the lifecycle event handlers.
    pub fn event_handlers(mut self, handlers: EventHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Build the client.
    ///
    /// Restores any token found in the credential store so an earlier
    /// session survives a process restart; a failing store downgrades to
    /// unauthenticated with a warning rather than failing the build.
    pub fn build(self) -> Result<OtoLinkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| OtoLinkError::ConfigurationError("base_url is required".into()))?;
        let parsed = Url::parse(&base_url)
            .map_err(|e| OtoLinkError::ConfigurationError(format!("invalid base_url: {}", e)))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let health_url = match self.health_url {
            Some(url) => url,
            None => format!("{}/health", parsed.origin().ascii_serialization()),
        };

        let http_client = reqwest::Client::builder()
            .timeout(self.timeouts.request_timeout)
            .connect_timeout(self.timeouts.connect_timeout)
            // Keep-alive pooling; the dashboard fires several calls at once
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .map_err(|e| OtoLinkError::ConfigurationError(e.to_string()))?;

        let store: Arc<dyn CredentialStore> = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new()));
        let token = match store.load() {
            Ok(token) => token,
            Err(err) => {
                warn!("[GATEWAY] Could not restore stored credential: {}", err);
                None
            }
        };

        Ok(OtoLinkClient {
            base_url,
            health_url,
            http_client,
            token: RwLock::new(token),
            store,
            handlers: RwLock::new(self.handlers),
            timeouts: self.timeouts,
        })
    }
}

impl std::fmt::Debug for OtoLinkClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtoLinkClientBuilder")
            .field("base_url", &self.base_url)
            .field("health_url", &self.health_url)
            .field("timeouts", &self.timeouts)
            .field("has_store", &self.store.is_some())
            .field("handlers", &self.handlers)
            .finish()
    }
}
