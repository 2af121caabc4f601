//! Lifecycle event handlers for the OtoPOS client.
//!
//! Provides callback-based hooks for observing the gateway from the
//! outside:
//!
//! - [`on_session_invalidated`](EventHandlers::on_session_invalidated):
//!   fired exactly once per 401 response, after the credential has been
//!   cleared. The presentation layer subscribes here to navigate to the
//!   login screen; the networking core never touches navigation itself.
//! - [`on_request`](EventHandlers::on_request) /
//!   [`on_response`](EventHandlers::on_response): optional debug hooks for
//!   every outgoing call and its status.
//!
//! # Example
//!
//! ```rust,no_run
//! use oto_link::{EventHandlers, OtoLinkClient};
//!
//! # fn example() -> oto_link::Result<()> {
//! let handlers = EventHandlers::new()
//!     .on_session_invalidated(|| {
//!         println!("session expired, back to login");
//!     })
//!     .on_response(|status, path| {
//!         println!("{} <- {}", path, status);
//!     });
//!
//! let client = OtoLinkClient::builder()
//!     .base_url("http://localhost:8080/api/v1")
//!     .event_handlers(handlers)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

/// Type alias for the session-invalidated callback.
pub type OnSessionInvalidatedCallback = Arc<dyn Fn() + Send + Sync>;

/// Type alias for the request debug hook (method, path).
pub type OnRequestCallback = Arc<dyn Fn(&str, &str) + Send + Sync>;

/// Type alias for the response debug hook (status, path).
pub type OnResponseCallback = Arc<dyn Fn(u16, &str) + Send + Sync>;

/// Gateway lifecycle event handlers.
///
/// All handlers are optional and `Send + Sync`. Multiple
/// session-invalidated listeners may be registered (the session store adds
/// one of its own); they are invoked in registration order.
#[derive(Clone, Default)]
pub struct EventHandlers {
    /// Called once per 401 response, after the credential is cleared.
    pub(crate) on_session_invalidated: Vec<OnSessionInvalidatedCallback>,

    /// Called for every outgoing request (debug/tracing).
    pub(crate) on_request: Option<OnRequestCallback>,

    /// Called for every received response (debug/tracing).
    pub(crate) on_response: Option<OnResponseCallback>,
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field(
                "on_session_invalidated",
                &self.on_session_invalidated.len(),
            )
            .field("on_request", &self.on_request.is_some())
            .field("on_response", &self.on_response.is_some())
            .finish()
    }
}

impl EventHandlers {
    /// Create a new empty `EventHandlers` (no callbacks registered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback fired when a 401 response invalidates the
    /// session. May be called multiple times; all callbacks run.
    pub fn on_session_invalidated(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_invalidated.push(Arc::new(f));
        self
    }

    /// Register a debug hook receiving `(method, path)` for every outgoing
    /// request. Not needed for normal operation.
    pub fn on_request(mut self, f: impl Fn(&str, &str) + Send + Sync + 'static) -> Self {
        self.on_request = Some(Arc::new(f));
        self
    }

    /// Register a debug hook receiving `(status, path)` for every received
    /// response. Not needed for normal operation.
    pub fn on_response(mut self, f: impl Fn(u16, &str) + Send + Sync + 'static) -> Self {
        self.on_response = Some(Arc::new(f));
        self
    }

    /// Returns `true` if any handler is registered.
    pub fn has_any(&self) -> bool {
        !self.on_session_invalidated.is_empty()
            || self.on_request.is_some()
            || self.on_response.is_some()
    }

    // ---------------------------------------------------------------
    // Internal dispatch helpers
    // ---------------------------------------------------------------

    /// Dispatch the session-invalidated event to all listeners.
    pub(crate) fn emit_session_invalidated(&self) {
        for cb in &self.on_session_invalidated {
            cb();
        }
    }

    /// Dispatch the request debug hook.
    pub(crate) fn emit_request(&self, method: &str, path: &str) {
        if let Some(cb) = &self.on_request {
            cb(method, path);
        }
    }

    /// Dispatch the response debug hook.
    pub(crate) fn emit_response(&self, status: u16, path: &str) {
        if let Some(cb) = &self.on_response {
            cb(status, path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_all_invalidation_listeners_run() {
        let count = Arc::new(AtomicUsize::new(0));
        let c1 = Arc::clone(&count);
        let c2 = Arc::clone(&count);

        let handlers = EventHandlers::new()
            .on_session_invalidated(move || {
                c1.fetch_add(1, Ordering::SeqCst);
            })
            .on_session_invalidated(move || {
                c2.fetch_add(1, Ordering::SeqCst);
            });

        assert!(handlers.has_any());
        handlers.emit_session_invalidated();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_handlers_are_silent() {
        let handlers = EventHandlers::new();
        assert!(!handlers.has_any());
        // No-ops, must not panic.
        handlers.emit_session_invalidated();
        handlers.emit_request("GET", "/customers");
        handlers.emit_response(200, "/customers");
    }
}
