//! Session lifecycle: the single authority for "who is logged in".
//!
//! [`SessionStore`] wraps the gateway client with an observable state
//! machine. UI code subscribes through a `tokio::sync::watch` channel, so
//! every transition is visible immediately; no stale session object is
//! ever handed out.
//!
//! State machine:
//!
//! ```text
//! Uninitialized --initialize--> Loading --success--> Authenticated(user)
//!                                  \----failure----> Unauthenticated
//! Authenticated --logout--> Unauthenticated
//! Authenticated --login--> Authenticated (replaces user)
//! Unauthenticated --login ok--> Authenticated
//! Unauthenticated --login err--> Unauthenticated (error surfaced)
//! any --401 on any in-flight call--> Unauthenticated
//! ```
//!
//! No state is terminal; the machine cycles for the lifetime of the
//! process, and any state is a valid rest point for interleaved async
//! continuations.

use crate::client::OtoLinkClient;
use crate::error::Result;
use crate::models::{LoginRequest, Role, User};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::watch;

/// Authentication state of the running application.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Before `initialize` has been called
    Uninitialized,
    /// Startup profile fetch in progress; route decisions must wait
    Loading,
    /// A user is logged in
    Authenticated(User),
    /// No user is logged in
    Unauthenticated,
}

impl SessionState {
    /// `true` iff a user is present.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The logged-in user's role, if any.
    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    /// `true` once startup has settled into authenticated or not.
    /// While unresolved, route decisions must render a neutral waiting
    /// state instead of redirecting.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Uninitialized | SessionState::Loading)
    }
}

/// Process-wide session authority.
///
/// Owns all session mutations; the gateway client's 401 invalidation hook
/// is the single exception, registered here at construction so that an
/// authorization check made after any 401 observes the cleared session.
pub struct SessionStore {
    client: Arc<OtoLinkClient>,
    state: Arc<watch::Sender<SessionState>>,
}

impl SessionStore {
    /// Create a session store over a shared gateway client.
    pub fn new(client: Arc<OtoLinkClient>) -> Self {
        let (tx, _rx) = watch::channel(SessionState::Uninitialized);
        let state = Arc::new(tx);

        let hook_state = Arc::clone(&state);
        client.on_session_invalidated(move || {
            hook_state.send_replace(SessionState::Unauthenticated);
        });

        Self { client, state }
    }

    /// The shared gateway client.
    pub fn client(&self) -> &Arc<OtoLinkClient> {
        &self.client
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// `true` iff a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_authenticated()
    }

    /// Resolve the session once at startup.
    ///
    /// With a stored credential, fetches the profile; any failure (network,
    /// auth, decode) is absorbed, the credential is cleared and the session
    /// ends `Unauthenticated`. Never fails and never leaves the session in
    /// `Loading`.
    pub async fn initialize(&self) -> SessionState {
        debug!("[SESSION] Initializing");
        self.state.send_replace(SessionState::Loading);

        let resolved = if self.client.is_authenticated() {
            match self.client.get_profile().await {
                Ok(user) => {
                    debug!("[SESSION] Restored session for '{}'", user.username);
                    SessionState::Authenticated(user)
                }
                Err(err) => {
                    warn!(
                        "[SESSION] Profile fetch failed, treating as logged out: {}",
                        err
                    );
                    if let Err(err) = self.client.clear_credential() {
                        warn!("[SESSION] Failed to clear stale credential: {}", err);
                    }
                    SessionState::Unauthenticated
                }
            }
        } else {
            debug!("[SESSION] No stored credential");
            SessionState::Unauthenticated
        };

        self.state.send_replace(resolved.clone());
        resolved
    }

    /// Log in with username and password.
    ///
    /// On success the credential is persisted (by the client) and the
    /// session becomes `Authenticated`. On failure the error propagates
    /// and the session keeps its previous state. Concurrent logins race;
    /// the last completed write wins.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User> {
        debug!("[SESSION] Login attempt for '{}'", credentials.username);
        let response = self.client.login(credentials).await?;
        self.state
            .send_replace(SessionState::Authenticated(response.user.clone()));
        Ok(response.user)
    }

    /// Log out synchronously. Clears the credential and marks the session
    /// unauthenticated. Idempotent: logging out while logged out is a
    /// no-op.
    pub fn logout(&self) {
        debug!("[SESSION] Logout");
        if let Err(err) = self.client.clear_credential() {
            warn!("[SESSION] Failed to clear credential on logout: {}", err);
        }
        self.state.send_replace(SessionState::Unauthenticated);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.current())
            .finish()
    }
}
