//! Middleware for the HTTP API.

pub mod security;

pub use security::security_headers;
