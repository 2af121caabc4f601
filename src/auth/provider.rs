//! Authentication provider for the OtoPOS client.
//!
//! The backend authenticates every call with a bearer token obtained from
//! `POST /auth/login`. The provider attaches the `Authorization` header;
//! when no credential is held, requests go out unauthenticated (the login
//! and health endpoints accept that).

/// Authentication credential applied to outgoing requests.
///
/// # Examples
///
/// ```rust
/// use oto_link::AuthProvider;
///
/// // Bearer token obtained from login
/// let auth = AuthProvider::bearer_token("eyJhbGc...".to_string());
///
/// // No authentication (login / health check)
/// let auth = AuthProvider::none();
/// ```
#[derive(Debug, Clone)]
pub enum AuthProvider {
    /// Bearer token authentication
    BearerToken(String),

    /// No authentication
    None,
}

impl AuthProvider {
    /// Create bearer token authentication
    pub fn bearer_token(token: String) -> Self {
        Self::BearerToken(token)
    }

    /// No authentication
    pub fn none() -> Self {
        Self::None
    }

    /// Build a provider from an optional stored token.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(t) => Self::BearerToken(t),
            None => Self::None,
        }
    }

    /// Attach the authentication header to an HTTP request builder.
    ///
    /// - BearerToken: `Authorization: Bearer <token>`
    /// - None: no header
    pub fn apply_to_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::BearerToken(token) => request.bearer_auth(token),
            Self::None => request,
        }
    }

    /// Check if a credential is configured
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}
