//! # oto-link
//!
//! Typed async client for the OtoPOS dealership/workshop gateway.
//!
//! The crate has three layers:
//!
//! - [`OtoLinkClient`]: the gateway client. Every call goes through a
//!   single dispatch path that attaches the bearer token, unwraps the
//!   `{data, message}` response envelope and maps failures onto the
//!   [`OtoLinkError`] taxonomy. A 401 on any call clears the stored
//!   credential and fires the session-invalidated hook exactly once.
//! - [`SessionStore`]: the observable login lifecycle
//!   (`Uninitialized -> Loading -> Authenticated | Unauthenticated`),
//!   built on `tokio::sync::watch`.
//! - [`routes`]: pure role-based authorization over the session state.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use oto_link::{OtoLinkClient, SessionStore, LoginRequest};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(
//!     OtoLinkClient::builder()
//!         .base_url("http://localhost:8080/api/v1")
//!         .build()?,
//! );
//!
//! let session = SessionStore::new(Arc::clone(&client));
//! session.initialize().await;
//!
//! let user = session
//!     .login(&LoginRequest::new("admin", "secret"))
//!     .await?;
//! println!("Logged in as {} ({})", user.username, user.role);
//!
//! let vehicles = client.list_vehicles(1, 10, None).await?;
//! println!("{} vehicles on page 1", vehicles.data.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod event_handlers;
pub mod models;
pub mod routes;
pub mod session;
pub mod timeouts;

pub use auth::AuthProvider;
pub use client::{OtoLinkClient, OtoLinkClientBuilder};
pub use config::ClientConfig;
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{OtoLinkError, Result};
pub use event_handlers::EventHandlers;
pub use models::{
    ApiEnvelope, ChangePasswordRequest, Customer, CustomerDraft, DashboardStats,
    HealthCheckResponse, LoginRequest, LoginResponse, Notification, Paginated, Pagination,
    PurchaseInvoice, PurchaseInvoiceDraft, Role, SalesInvoice, SalesInvoiceDraft, SparePart,
    SparePartDraft, UploadResponse, User, UserDraft, Vehicle, VehicleDraft, VehicleStatus,
    WorkOrder, WorkOrderDraft, WorkOrderStatus,
};
pub use routes::{authorize, authorize_path, can_access, required_roles, RouteAccess, NAV_TABLE};
pub use session::{SessionState, SessionStore};
pub use timeouts::OtoLinkTimeouts;

/// Crate version, from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
