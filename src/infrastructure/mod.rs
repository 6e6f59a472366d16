//! Infrastructure layer - Concrete implementations of domain traits

pub mod api_key;
pub mod logging;
