// User Service Library
// Data model and HTTP client for the remote users API

pub mod client;
pub mod config;
pub mod error;
pub mod models;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::{HttpUserApi, UserApi};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ServiceError, ServiceResult};
pub use models::{is_valid_email, User, UserEnvelope, UserId, UserPage, UserUpdate};
