use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    #[serde(rename(serialize = "imageUrl"))]
    pub image_url: String,
}
