//! sample-app - a small hardened web service.
//!
//! Validates and sanitizes untrusted input before it reaches any
//! interpreting context, and serves a handful of demo endpoints.

pub mod auth;
pub mod calc;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod web;

pub use auth::{hash_password, verify_password, PasswordError};
pub use calc::{calculate, CalcError, Operation};
pub use config::Config;
pub use error::{AppError, Result};
pub use input::{
    sanitize_filename, sanitize_input, validate_alphanumeric, validate_email, validate_hostname,
    validate_input,
};
pub use web::{create_router, ApiError, WebServer};
