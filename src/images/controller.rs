use axum::{
    extract::{RawBody, State},
    http::Method,
    Json,
};
use axum_macros::debug_handler;
use tracing::Instrument;
use uuid::Uuid;

use crate::{app::models::api_error::ApiError, AppState};

use super::{models::generate_image_response::GenerateImageResponse, service};

// Mounted for every method; the service answers non-POST requests itself.
// The body is read by the service, after the credential check.
#[debug_handler]
pub async fn generate_image(
    State(state): State<AppState>,
    method: Method,
    RawBody(body): RawBody,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    let span = tracing::info_span!("generate_image", request_id = %Uuid::new_v4());

    match service::generate_image(&method, body, &state)
        .instrument(span)
        .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}
