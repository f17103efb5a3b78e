use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::FflError;

/// `{"status": "success", "data": ...}` envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    status: &'static str,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            data,
        })
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
}

impl IntoResponse for FflError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }

        let body = Json(ErrorResponse {
            status: "error",
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
