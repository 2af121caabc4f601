//! Data models for the oto-link client library.
//!
//! Defines the uniform response envelope, pagination wrapper and the domain
//! payload shapes moving through the gateway. Domain structs are plain
//! serde shapes; the backend owns all business rules.

pub mod customer;
pub mod dashboard_stats;
pub mod envelope;
pub mod health_check_response;
pub mod login_request;
pub mod login_response;
pub mod notification;
pub mod pagination;
pub mod purchase_invoice;
pub mod role;
pub mod sales_invoice;
pub mod spare_part;
pub mod upload_response;
pub mod user;
pub mod vehicle;
pub mod work_order;

pub use customer::{Customer, CustomerDraft};
pub use dashboard_stats::DashboardStats;
pub use envelope::ApiEnvelope;
pub use health_check_response::HealthCheckResponse;
pub use login_request::LoginRequest;
pub use login_response::LoginResponse;
pub use notification::Notification;
pub use pagination::{Paginated, Pagination};
pub use purchase_invoice::{PurchaseInvoice, PurchaseInvoiceDraft};
pub use role::Role;
pub use sales_invoice::{PaymentMethod, PaymentStatus, SalesInvoice, SalesInvoiceDraft};
pub use spare_part::{SparePart, SparePartDraft};
pub use upload_response::UploadResponse;
pub use user::{ChangePasswordRequest, User, UserDraft};
pub use vehicle::{Vehicle, VehicleDraft, VehicleStatus};
pub use work_order::{WorkOrder, WorkOrderDraft, WorkOrderStatus};
