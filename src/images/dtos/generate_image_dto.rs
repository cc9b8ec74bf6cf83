use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "prompt must not be empty."))]
    pub prompt: String,
}
