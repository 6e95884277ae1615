mod features;
mod services;

use tracing::{Level, error, info};

use shared::utilities::telemetry;

use crate::features::implementations::ensure_repository;
use crate::features::models::EnsureOutcome;
use crate::services::build_ecr::Ecr;

/// Container image repository backing the dashboard deployment.
const REPOSITORY_NAME: &str = "monitor-dashboard";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init(Level::INFO);

    let ecr = Ecr::new().await;

    match ensure_repository(&ecr, REPOSITORY_NAME).await {
        Ok(EnsureOutcome::Created(repository)) => {
            info!("Successfully created repository '{}'", repository.name);
            match repository.uri {
                Some(uri) => info!("Repository URI: {uri}"),
                None => info!("Repository URI not returned by the provider"),
            }
        }
        Ok(EnsureOutcome::AlreadyExists) => {
            info!("Repository '{REPOSITORY_NAME}' already exists");
        }
        Err(err) => {
            error!("Failed to provision repository '{REPOSITORY_NAME}': {err}");
            std::process::exit(1);
        }
    }

    Ok(())
}
