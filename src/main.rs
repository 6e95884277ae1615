mod features;
mod services;
mod utilities;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use shared::utilities::{config::Config, telemetry};

use crate::features::dashboard;
use crate::services::{build_sampler::Sampler, build_templates::Templates};
use crate::utilities::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::init().await?;
    telemetry::init(config.tracing_level);

    let state = AppState {
        sampler: Sampler::new(),
        templates: Templates::new()?,
        config: config.clone(),
    };

    let app = Router::new()
        .merge(dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_addres).await?;
    info!("Dashboard listening on {}", config.server_addres);
    axum::serve(listener, app).await?;

    Ok(())
}
