use axum::{body::Body, http::Method};
use bytes::Bytes;
use http_body::{LengthLimitError, Limited};
use validator::Validate;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    AppState,
};

use super::{
    apis::rapidapi, dtos::generate_image_dto::GenerateImageDto,
    models::generate_image_response::GenerateImageResponse,
};

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub async fn generate_image(
    method: &Method,
    body: Body,
    state: &AppState,
) -> Result<GenerateImageResponse, ApiError> {
    // Must run before request validation.
    let Some(api_key) = state.envy.api_key() else {
        tracing::error!("GPT_API_KEY is not configured");
        return Err(DefaultApiError::ServerMisconfigured.value());
    };

    if method != Method::POST {
        tracing::warn!(%method, "rejected non-POST request");
        return Err(DefaultApiError::InvalidRequest.value());
    }

    let bytes = read_body(body).await?;
    let dto = parse_request(&bytes)?;

    let image_url =
        rapidapi::service::generate_image(&dto.prompt, api_key, &state.client, &state.provider)
            .await?;

    Ok(GenerateImageResponse { image_url })
}

async fn read_body(body: Body) -> Result<Bytes, ApiError> {
    match hyper::body::to_bytes(Limited::new(body, MAX_BODY_BYTES)).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            tracing::warn!(limit = MAX_BODY_BYTES, "rejected oversized request body");
            Err(DefaultApiError::PayloadTooLarge.value())
        }
        Err(e) => {
            tracing::error!(%e, "failed to read request body");
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

fn parse_request(body: &Bytes) -> Result<GenerateImageDto, ApiError> {
    let dto: GenerateImageDto = match serde_json::from_slice(body) {
        Ok(dto) => dto,
        Err(e) => {
            tracing::warn!(%e, "rejected unparsable request body");
            return Err(DefaultApiError::InvalidRequest.value());
        }
    };

    match dto.validate() {
        Ok(_) => Ok(dto),
        Err(e) => {
            tracing::warn!(%e, "rejected invalid request body");
            Err(DefaultApiError::InvalidRequest.value())
        }
    }
}
