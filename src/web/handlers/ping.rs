//! Simulated ping handler.

use axum::Json;

use crate::input::{sanitize_input, validate_hostname};
use crate::web::dto::{PingQuery, PingResponse};
use crate::web::error::ApiError;
use crate::web::extract::FirstQuery;

/// GET /ping?host= - Validate a hostname and report a simulated ping.
///
/// No process is spawned.
pub async fn ping(
    FirstQuery(query): FirstQuery<PingQuery>,
) -> Result<Json<PingResponse>, ApiError> {
    let host = query.host.unwrap_or_else(|| "localhost".to_string());

    if !validate_hostname(&host) {
        tracing::warn!(endpoint = "/ping", len = host.len(), "Rejected hostname");
        return Err(ApiError::bad_request("Invalid hostname format"));
    }

    Ok(Json(PingResponse {
        host: sanitize_input(Some(&host)),
        status: "simulated",
        note: "Command execution is disabled; hostname validated".to_string(),
    }))
}
