//! Timeout configuration for OtoPOS client operations.

use std::time::Duration;

/// Timeout configuration for gateway calls.
///
/// The request timeout is the only bound on a call's lifetime: operations
/// are not cancellable once issued.
///
/// # Examples
///
/// ```rust
/// use oto_link::OtoLinkTimeouts;
/// use std::time::Duration;
///
/// // Defaults: 10 s request budget
/// let timeouts = OtoLinkTimeouts::default();
///
/// // Aggressive timeouts for local development
/// let timeouts = OtoLinkTimeouts::fast();
///
/// // Custom
/// let timeouts = OtoLinkTimeouts::default()
///     .with_request_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct OtoLinkTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Total budget for a request, from send to decoded response.
    /// Default: 10 seconds
    pub request_timeout: Duration,
}

impl Default for OtoLinkTimeouts {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl OtoLinkTimeouts {
    /// Timeouts optimized for fast local development.
    pub fn fast() -> Self {
        Self {
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(2),
        }
    }

    /// Timeouts for high-latency or unreliable networks.
    pub fn relaxed() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Replace the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Replace the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
