//! Route authorization: a pure gate over the session state.
//!
//! Navigation is the presentation layer's job; this module only answers
//! "may this session see this destination, and if not, where should it go
//! instead". No I/O, no side effects, fully deterministic.

use crate::models::Role;
use crate::session::SessionState;

/// Navigational destinations of the application.
///
/// Each destination carries its required-role set; `&[]` means any
/// authenticated user may enter. `/login` is the only unauthenticated
/// destination and is handled by the caller, not this table.
pub const NAV_TABLE: &[(&str, &[Role])] = &[
    ("/dashboard", &[]),
    ("/profile", &[]),
    ("/notifications", &[]),
    ("/vehicles", &[]),
    ("/customers", &[]),
    ("/sales", &[Role::Admin, Role::Kasir]),
    ("/purchases", &[Role::Admin, Role::Kasir]),
    ("/work-orders", &[]),
    ("/spare-parts", &[]),
    ("/users", &[Role::Admin]),
    ("/reports", &[]),
];

/// Outcome of an authorization check, including where to send a session
/// that may not enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// The session may enter.
    Granted,
    /// Not logged in; send to the login entry point.
    RedirectToLogin,
    /// Logged in with the wrong role; send to the user's own dashboard.
    RedirectToDashboard,
    /// Session still resolving; render a neutral waiting state and
    /// re-evaluate once it settles. Never redirect from here.
    Pending,
}

/// Required roles for a destination path, if it is in the navigation
/// table. `Some(&[])` means authenticated-only.
pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    NAV_TABLE
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, roles)| *roles)
}

/// Whether the session may view a destination with the given role
/// requirement.
///
/// Empty `required` means any authenticated user qualifies. An
/// unauthenticated (or still unresolved) session is denied everywhere,
/// including unrestricted destinations.
pub fn can_access(state: &SessionState, required: &[Role]) -> bool {
    match state.role() {
        Some(role) => required.is_empty() || required.contains(&role),
        None => false,
    }
}

/// Full authorization decision for a destination.
///
/// Unlike [`can_access`], this distinguishes the unresolved startup window
/// (`Pending`) and tells a denied session where to go: unauthenticated
/// sessions to login, wrong-role sessions to their own dashboard.
pub fn authorize(state: &SessionState, required: &[Role]) -> RouteAccess {
    if !state.is_resolved() {
        return RouteAccess::Pending;
    }
    match state.role() {
        Some(role) if required.is_empty() || required.contains(&role) => RouteAccess::Granted,
        Some(_) => RouteAccess::RedirectToDashboard,
        None => RouteAccess::RedirectToLogin,
    }
}

/// [`authorize`] looked up by path. Unknown paths require authentication
/// only.
pub fn authorize_path(state: &SessionState, path: &str) -> RouteAccess {
    authorize(state, required_roles(path).unwrap_or(&[]))
}
