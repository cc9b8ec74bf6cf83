use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    http::header::CONTENT_TYPE,
    http::Method,
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{app::env::Envy, images::apis::rapidapi::config::ProviderConfig};

mod app;
mod images;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub provider: Arc<ProviderConfig>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        let provider = ProviderConfig::from_envy(&envy);

        Self {
            envy: Arc::new(envy),
            provider: Arc::new(provider),
            client: reqwest::Client::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/generate-image", any(images::controller::generate_image))
        .route("/api/generate-image", any(images::controller::generate_image))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    tracing::info!(app_env = %envy.app_env, "loaded environment");
    if envy.api_key().is_none() {
        tracing::warn!("GPT_API_KEY is not set, every generation request will fail");
    }
    if envy.image_width.is_some() || envy.image_height.is_some() {
        tracing::info!("IMAGE_WIDTH/IMAGE_HEIGHT are ignored, the provider only accepts a size preset");
    }

    let port = envy.port.to_owned().unwrap_or(3000);
    let state = AppState::new(envy);
    tracing::info!(
        api_url = %state.provider.api_url,
        image_url_fields = ?state.provider.image_url_fields.fields(),
        "provider configured"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await
        .unwrap();
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(api_key: Option<&str>, api_url: &str) -> Self {
        Self::new(Envy {
            gpt_api_key: api_key.map(str::to_string),
            gpt_api_url: Some(api_url.to_string()),
            ..Default::default()
        })
    }
}
