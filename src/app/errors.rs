use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    ServerMisconfigured,
    InvalidRequest,
    PayloadTooLarge,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Internal server error".to_string(),
            },
            Self::ServerMisconfigured => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Server error: API key is not configured.".to_string(),
            },
            Self::InvalidRequest => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Missing prompt or invalid method.".to_string(),
            },
            Self::PayloadTooLarge => ApiError {
                code: StatusCode::PAYLOAD_TOO_LARGE,
                message: "Request body is too large.".to_string(),
            },
        }
    }
}
