use kube::config::KubeConfigOptions;
use kube::{Client, Config};
use tracing::{debug, info};

use shared::utilities::errors::AppError;

/// Cluster credential source. Sources are attempted in order; the first
/// one that loads wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Local developer kubeconfig at the default location.
    Kubeconfig,
    /// Service-account credentials mounted inside a cluster pod.
    InCluster,
}

impl CredentialSource {
    pub const DEFAULT_ORDER: &'static [CredentialSource] =
        &[CredentialSource::Kubeconfig, CredentialSource::InCluster];

    async fn load(self) -> Result<Config, AppError> {
        match self {
            CredentialSource::Kubeconfig => {
                Ok(Config::from_kubeconfig(&KubeConfigOptions::default()).await?)
            }
            CredentialSource::InCluster => Ok(Config::incluster()?),
        }
    }
}

#[derive(Clone)]
pub struct Kubernetes {
    pub client: Client,
}

impl Kubernetes {
    /// Build a client from the first credential source that loads.
    pub async fn connect(sources: &[CredentialSource]) -> Result<Self, AppError> {
        for source in sources {
            match source.load().await {
                Ok(config) => {
                    info!("Loaded cluster credentials from {source:?}");
                    let client = Client::try_from(config)?;
                    return Ok(Kubernetes { client });
                }
                Err(err) => debug!("Credential source {source:?} unavailable: {err}"),
            }
        }

        Err(AppError::ClusterCredentialsError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kubeconfig_is_attempted_before_in_cluster() {
        assert_eq!(
            CredentialSource::DEFAULT_ORDER,
            &[CredentialSource::Kubeconfig, CredentialSource::InCluster]
        );
    }
}
