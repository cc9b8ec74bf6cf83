use crate::app::env::Envy;

use super::structs::image_url_fields::ImageUrlFields;

pub static API_URL: &str = "https://ai-text-to-image-generator-flux-free-api.p.rapidapi.com/aaaaaaaaaaaaaaaaaiimagegenerator/quick.php";
pub static API_HOST: &str = "ai-text-to-image-generator-flux-free-api.p.rapidapi.com";

pub static DEFAULT_STYLE_ID: u8 = 4;
pub static DEFAULT_SIZE: &str = "1-1";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_url: String,
    pub api_host: String,
    pub style_id: u8,
    pub size: String,
    pub image_url_fields: ImageUrlFields,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            api_host: API_HOST.to_string(),
            style_id: DEFAULT_STYLE_ID,
            size: DEFAULT_SIZE.to_string(),
            image_url_fields: ImageUrlFields::default(),
        }
    }
}

impl ProviderConfig {
    pub fn from_envy(envy: &Envy) -> Self {
        let default = Self::default();

        Self {
            api_url: envy.gpt_api_url.clone().unwrap_or(default.api_url),
            api_host: envy.gpt_api_host.clone().unwrap_or(default.api_host),
            image_url_fields: envy
                .image_url_fields
                .as_deref()
                .and_then(ImageUrlFields::parse)
                .unwrap_or(default.image_url_fields),
            style_id: default.style_id,
            size: default.size,
        }
    }
}
