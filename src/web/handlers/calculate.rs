//! Calculation handler.

use axum::Json;

use crate::calc::{calculate, Operation, MAX_CALC_VALUE};
use crate::web::dto::{CalculateQuery, CalculateResponse};
use crate::web::error::ApiError;
use crate::web::extract::FirstQuery;

/// GET /calculate?value=&operation= - Run an enumerated calculation.
///
/// `value` defaults to 0 and must lie in `0..=MAX_CALC_VALUE`; `operation`
/// defaults to `add` and must name a known [`Operation`].
pub async fn run_calculation(
    FirstQuery(query): FirstQuery<CalculateQuery>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let value = match query.value.as_deref() {
        None => 0,
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
            tracing::warn!(endpoint = "/calculate", "Rejected non-integer value");
            ApiError::bad_request("Invalid value")
        })?,
    };

    if !(0..=MAX_CALC_VALUE).contains(&value) {
        tracing::warn!(endpoint = "/calculate", value, "Rejected out-of-range value");
        return Err(ApiError::bad_request("Value out of range"));
    }

    let operation: Operation = query
        .operation
        .as_deref()
        .unwrap_or("add")
        .parse()
        .map_err(|_| {
            tracing::warn!(endpoint = "/calculate", "Rejected unknown operation");
            ApiError::bad_request("Unknown operation")
        })?;

    Ok(Json(CalculateResponse {
        value,
        operation: operation.to_string(),
        result: calculate(value, operation),
    }))
}
