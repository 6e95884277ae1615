mod features;
mod services;

use tracing::{Level, error, info};

use shared::utilities::telemetry;

use crate::features::implementations::deploy;
use crate::services::build_kubernetes::{CredentialSource, Kubernetes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init(Level::INFO);

    let kubernetes = Kubernetes::connect(CredentialSource::DEFAULT_ORDER).await?;
    let report = deploy(&kubernetes).await;

    match report.deployment {
        Ok(()) => info!("Deployment created successfully"),
        Err(err) => error!("Failed to create deployment: {err}"),
    }
    match report.service {
        Ok(()) => info!("Service created successfully"),
        Err(err) => error!("Failed to create service: {err}"),
    }

    Ok(())
}
