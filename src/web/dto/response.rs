//! Response DTOs.

use serde::Serialize;

/// `GET /` response.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
    pub status: &'static str,
}

/// `GET /health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /api/data` response.
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub status: &'static str,
    pub message: String,
    pub data: Vec<i64>,
}

/// `GET /user` response.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// Message echoing the escaped user ID.
    pub message: String,
    pub note: String,
}

/// `GET /ping` response.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    /// Escaped hostname.
    pub host: String,
    /// Always `simulated`: no command is executed.
    pub status: &'static str,
    pub note: String,
}

/// `GET /calculate` response.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub value: i64,
    pub operation: String,
    pub result: f64,
}
