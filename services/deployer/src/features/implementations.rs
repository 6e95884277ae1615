use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::Api;
use kube::api::PostParams;

use shared::utilities::errors::AppError;

use crate::features::models::{self, NAMESPACE};
use crate::services::build_kubernetes::Kubernetes;

/// Control-plane surface used by the deployer. Implemented by the kube
/// client; tests substitute fakes.
pub trait Cluster {
    async fn create_deployment(&self, deployment: &Deployment) -> Result<(), AppError>;
    async fn create_service(&self, service: &Service) -> Result<(), AppError>;
}

impl Cluster for Kubernetes {
    async fn create_deployment(&self, deployment: &Deployment) -> Result<(), AppError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), NAMESPACE);
        api.create(&PostParams::default(), deployment).await?;
        Ok(())
    }

    async fn create_service(&self, service: &Service) -> Result<(), AppError> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), NAMESPACE);
        api.create(&PostParams::default(), service).await?;
        Ok(())
    }
}

pub struct DeployReport {
    pub deployment: Result<(), AppError>,
    pub service: Result<(), AppError>,
}

/// Submit the Deployment, then the Service. The two submissions are
/// independent failure domains: a Deployment error never blocks the
/// Service attempt. Objects that already exist fail at the API server
/// like any other provider error; there is no reconcile path.
pub async fn deploy<C: Cluster>(cluster: &C) -> DeployReport {
    let deployment = cluster
        .create_deployment(&models::dashboard_deployment())
        .await;
    let service = cluster.create_service(&models::dashboard_service()).await;

    DeployReport {
        deployment,
        service,
    }
}
