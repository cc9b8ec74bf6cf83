use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, Response, StatusCode,
};
use serde_json::Value;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    images::errors::ImageApiError,
};

use super::{
    config::ProviderConfig, models::input_spec::InputSpec,
    structs::image_url_fields::ImageUrlFields,
};

/// Sends one generation request to the provider and returns the image reference.
pub async fn generate_image(
    prompt: &str,
    api_key: &str,
    client: &Client,
    config: &ProviderConfig,
) -> Result<String, ApiError> {
    let input_spec = provide_input_spec(prompt, config);
    let headers = provide_headers(api_key, config)?;

    let result = client
        .post(&config.api_url)
        .headers(headers)
        .json(&input_spec)
        .send()
        .await;

    match result {
        Ok(res) => parse_response_to_image_url(res, &config.image_url_fields).await,
        Err(e) => {
            tracing::error!(%e, "generate_image failed to reach provider");
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

fn provide_input_spec(prompt: &str, config: &ProviderConfig) -> InputSpec {
    InputSpec {
        prompt: prompt.to_string(),
        style_id: config.style_id,
        size: config.size.to_string(),
    }
}

fn provide_headers(api_key: &str, config: &ProviderConfig) -> Result<HeaderMap, ApiError> {
    let Ok(key) = HeaderValue::from_str(api_key.trim()) else {
        tracing::error!("provider api key is not a valid header value");
        return Err(DefaultApiError::InternalServerError.value());
    };

    let Ok(host) = HeaderValue::from_str(&config.api_host) else {
        tracing::error!(api_host = %config.api_host, "provider host is not a valid header value");
        return Err(DefaultApiError::InternalServerError.value());
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert("x-rapidapi-key", key);
    headers.insert("x-rapidapi-host", host);

    Ok(headers)
}

async fn parse_response_to_image_url(
    res: Response,
    image_url_fields: &ImageUrlFields,
) -> Result<String, ApiError> {
    let status = res.status();

    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(%e, "failed to read provider response body");
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    if !status.is_success() {
        return Err(provider_error(status, &text));
    }

    let value: Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(%e, %text, "provider returned malformed json");
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    match image_url_fields.extract(&value) {
        Some(image_url) => Ok(image_url),
        None => {
            tracing::error!(payload = %value, "provider response missing image url");
            Err(ImageApiError::ImageUrlNotFound.value())
        }
    }
}

fn provider_error(status: StatusCode, text: &str) -> ApiError {
    tracing::error!(status = status.as_u16(), body = %text, "provider error response");

    let message = serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|value| value.get("message").and_then(render_message))
        .unwrap_or_else(|| "Check API documentation.".to_string());

    ApiError {
        code: status,
        message: format!(
            "External API failed with status {}. Message: {}",
            status.as_u16(),
            message
        ),
    }
}

// Falsy JSON values (null, false, 0, "") count as absent.
fn render_message(message: &Value) -> Option<String> {
    match message {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.to_string()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
