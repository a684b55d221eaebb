//! Session cookie policy.
//!
//! There is no session store. This module only fixes how a session cookie
//! must look whenever one is issued.

use std::fmt;

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::{SameSitePolicy, SessionConfig};

impl From<SameSitePolicy> for SameSite {
    fn from(policy: SameSitePolicy) -> Self {
        match policy {
            SameSitePolicy::Strict => SameSite::Strict,
            SameSitePolicy::Lax => SameSite::Lax,
            SameSitePolicy::None => SameSite::None,
        }
    }
}

/// Process-wide cookie policy, built once from [`SessionConfig`].
#[derive(Clone)]
pub struct SessionPolicy {
    cookie_name: String,
    secure: bool,
    http_only: bool,
    same_site: SameSite,
    lifetime: time::Duration,
    secret_key: String,
}

impl SessionPolicy {
    /// Build the policy from configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        let lifetime_secs = i64::try_from(config.lifetime_secs).unwrap_or(i64::MAX);
        Self {
            cookie_name: config.cookie_name.clone(),
            secure: config.secure,
            http_only: config.http_only,
            same_site: config.same_site.into(),
            lifetime: time::Duration::seconds(lifetime_secs),
            secret_key: config.secret_key.clone(),
        }
    }

    /// Name of the session cookie.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Cookie lifetime.
    pub fn lifetime(&self) -> time::Duration {
        self.lifetime
    }

    /// Secret key sessions are signed with.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Build a session cookie carrying `value` with every policy attribute applied.
    pub fn cookie(&self, value: impl Into<String>) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), value.into()))
            .path("/")
            .secure(self.secure)
            .http_only(self.http_only)
            .same_site(self.same_site)
            .max_age(self.lifetime)
            .build()
    }
}

impl fmt::Debug for SessionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionPolicy")
            .field("cookie_name", &self.cookie_name)
            .field("secure", &self.secure)
            .field("http_only", &self.http_only)
            .field("same_site", &self.same_site)
            .field("lifetime", &self.lifetime)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
