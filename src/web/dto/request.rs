//! Query-string DTOs.
//!
//! Every parameter is optional; handlers supply the defaults.

use serde::Deserialize;

/// `GET /user` query.
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    /// User ID.
    pub id: Option<String>,
}

/// `GET /ping` query.
#[derive(Debug, Default, Deserialize)]
pub struct PingQuery {
    /// Hostname to (pretend to) ping.
    pub host: Option<String>,
}

/// `GET /hello` query.
#[derive(Debug, Default, Deserialize)]
pub struct HelloQuery {
    /// Name to greet.
    pub name: Option<String>,
}

/// `GET /redirect` query.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    /// Redirect target.
    pub url: Option<String>,
}

/// `GET /calculate` query.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateQuery {
    /// Upper bound of the calculation, parsed by the handler.
    pub value: Option<String>,
    /// Operation name.
    pub operation: Option<String>,
}
