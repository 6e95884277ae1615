use axum::{extract::State, response::Html};
use tera::Context;
use tracing::info;

use shared::utilities::errors::AppError;

use crate::features::dashboard::models;
use crate::features::dashboard::schemas::DashboardContext;
use crate::services::{build_sampler::Sampler, build_templates::Templates};

/// Render the monitoring dashboard. Sampling faults degrade the page,
/// they never fail the request.
pub async fn index_handler(
    State(sampler): State<Sampler>,
    State(templates): State<Templates>,
) -> Result<Html<String>, AppError> {
    let snapshot = sampler.sample().await;
    let message = models::alert_message(&snapshot);

    let temp_display = match snapshot.cpu_temp {
        Some(temp) => format!("{temp:.1}"),
        None => "N/A".to_string(),
    };

    info!(
        "CPU: {:.2}%, Memory: {:.2}%, Temp: {}",
        snapshot.cpu_percent, snapshot.memory_percent, temp_display
    );

    let context = Context::from_serialize(DashboardContext {
        cpu_metric: snapshot.cpu_percent,
        mem_metric: snapshot.memory_percent,
        cpu_temp: temp_display,
        message,
        sampled_at: snapshot.sampled_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    })?;

    let page = templates.render("index.html", &context)?;
    Ok(Html(page))
}
