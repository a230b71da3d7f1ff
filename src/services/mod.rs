pub mod auth_service;
pub mod auth_storage;
pub mod http;

pub use http::{ApiClient, ApiError, ApiErrorKind};
