//! Error handling.
//!
//! Errors are split into:
//! - **Initialization** errors (logger, HTTP client)
//! - **Audit** errors (configuration, credentials, provider, transport)

mod types;

// Re-export public API
pub use types::{AuditError, InitializationError, AUTH_ERROR_MESSAGE};
