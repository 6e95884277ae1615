use aws_config::BehaviorVersion;
use aws_sdk_ecr::Client;
use aws_sdk_ecr::error::DisplayErrorContext;

use shared::utilities::errors::AppError;

use crate::features::implementations::Registry;
use crate::features::models::{EnsureOutcome, RepositoryDescriptor};

pub struct Ecr {
    pub client: Client,
}

impl Ecr {
    /// Build the ECR client from the default credential chain and region.
    pub async fn new() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Ecr {
            client: Client::new(&config),
        }
    }
}

impl Registry for Ecr {
    async fn repository_names(&self) -> Result<Vec<String>, AppError> {
        let response = self
            .client
            .describe_repositories()
            .send()
            .await
            .map_err(|err| AppError::RegistryError(DisplayErrorContext(&err).to_string()))?;

        Ok(response
            .repositories()
            .iter()
            .filter_map(|repository| repository.repository_name().map(str::to_string))
            .collect())
    }

    async fn create_repository(&self, name: &str) -> Result<EnsureOutcome, AppError> {
        match self
            .client
            .create_repository()
            .repository_name(name)
            .send()
            .await
        {
            Ok(response) => {
                let uri = response
                    .repository()
                    .and_then(|repository| repository.repository_uri())
                    .map(str::to_string);
                Ok(EnsureOutcome::Created(RepositoryDescriptor {
                    name: name.to_string(),
                    uri,
                }))
            }
            Err(err) => {
                // Another writer can create the repository between our
                // listing and this call.
                let service_err = err.into_service_error();
                if service_err.is_repository_already_exists_exception() {
                    Ok(EnsureOutcome::AlreadyExists)
                } else {
                    Err(AppError::RegistryError(
                        DisplayErrorContext(&service_err).to_string(),
                    ))
                }
            }
        }
    }
}
