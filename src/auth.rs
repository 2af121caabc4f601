//! Authentication for the OtoPOS gateway.

pub mod provider;

pub use provider::AuthProvider;
