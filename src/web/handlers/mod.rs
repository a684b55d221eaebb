//! API handlers.

pub mod calculate;
pub mod hello;
pub mod ping;
pub mod redirect;
pub mod status;
pub mod user;

pub use calculate::*;
pub use hello::*;
pub use ping::*;
pub use redirect::*;
pub use status::*;
pub use user::*;

use crate::config::Config;
use crate::web::session::SessionPolicy;

/// Application state shared across handlers.
///
/// Built once from [`Config`] at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Network locations `/redirect` may point at.
    pub redirect_hosts: Vec<String>,
    /// Session cookie policy.
    pub session: SessionPolicy,
}

impl AppState {
    /// Create the application state from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            redirect_hosts: config.redirect.allowed_hosts.clone(),
            session: SessionPolicy::from_config(&config.session),
        }
    }
}
