//! API middleware components

pub mod logging;
pub mod security;

pub use logging::{logging_middleware, request_path_label};
pub use security::security_headers_middleware;
