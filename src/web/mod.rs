//! HTTP API for sample-app.
//!
//! Handlers validate every parameter against an allow-list before use and
//! escape whatever they echo back.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod session;

pub use error::ApiError;
pub use extract::FirstQuery;
pub use router::create_router;
pub use server::WebServer;
pub use session::SessionPolicy;
