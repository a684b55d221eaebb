//! User lookup handler.

use axum::Json;

use crate::input::{sanitize_input, validate_alphanumeric};
use crate::web::dto::{UserQuery, UserResponse};
use crate::web::error::ApiError;
use crate::web::extract::FirstQuery;

/// GET /user?id= - Look up a user by alphanumeric ID.
///
/// The ID is checked against an allow-list before use, so nothing but
/// letters and digits can ever reach a query.
pub async fn get_user(
    FirstQuery(query): FirstQuery<UserQuery>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = query.id.unwrap_or_default();

    if !validate_alphanumeric(&id) {
        tracing::warn!(endpoint = "/user", len = id.len(), "Rejected user ID");
        return Err(ApiError::bad_request("Invalid user ID format"));
    }

    Ok(Json(UserResponse {
        message: format!("User ID: {}", sanitize_input(Some(&id))),
        note: "Input validated; only alphanumeric IDs are accepted".to_string(),
    }))
}
