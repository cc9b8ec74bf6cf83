use serde::Deserialize;

fn default_app_env() -> String {
    "development".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub gpt_api_key: Option<String>,
    pub gpt_api_url: Option<String>,
    pub gpt_api_host: Option<String>,

    pub image_url_fields: Option<String>,

    // Never forwarded to the provider, so never parsed either.
    pub image_width: Option<String>,
    pub image_height: Option<String>,
}

impl Envy {
    /// Trimmed provider key, or `None` when unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        match self.gpt_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Some(key),
            _ => None,
        }
    }
}
