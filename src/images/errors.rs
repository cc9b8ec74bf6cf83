use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImageApiError {
    ImageUrlNotFound,
}

impl ImageApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ImageUrlNotFound => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Image URL not found in API response.".to_string(),
            },
        }
    }
}
