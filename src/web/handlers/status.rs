//! Static status endpoints.

use axum::Json;

use crate::web::dto::{DataResponse, HealthResponse, HomeResponse};

/// GET / - Service banner.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Hello from Jenkins Pipeline!".to_string(),
        status: "success",
    })
}

/// GET /health - Health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}

/// GET /api/data - Fixed sample payload.
pub async fn get_data() -> Json<DataResponse> {
    Json(DataResponse {
        status: "success",
        message: "Data retrieved".to_string(),
        data: vec![1, 2, 3, 4, 5],
    })
}
