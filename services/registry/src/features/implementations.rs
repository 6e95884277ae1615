use shared::utilities::errors::AppError;

use crate::features::models::EnsureOutcome;

/// Registry management surface used by the provisioner. Implemented by
/// the ECR client; tests substitute fakes.
pub trait Registry {
    async fn repository_names(&self) -> Result<Vec<String>, AppError>;

    /// Create the named repository. Losing a create race against another
    /// writer resolves to `AlreadyExists` rather than an error.
    async fn create_repository(&self, name: &str) -> Result<EnsureOutcome, AppError>;
}

/// Create the repository when absent. The listing runs first, so a name
/// that is already present never issues a create call.
pub async fn ensure_repository<R: Registry>(
    registry: &R,
    name: &str,
) -> Result<EnsureOutcome, AppError> {
    let names = registry.repository_names().await?;
    if names.iter().any(|existing| existing == name) {
        return Ok(EnsureOutcome::AlreadyExists);
    }

    registry.create_repository(name).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::features::models::RepositoryDescriptor;

    struct FakeRegistry {
        names: Vec<String>,
        create_outcome: Option<EnsureOutcome>,
        fail_listing: bool,
        create_calls: Mutex<Vec<String>>,
    }

    impl FakeRegistry {
        fn new(names: &[&str], create_outcome: Option<EnsureOutcome>) -> Self {
            FakeRegistry {
                names: names.iter().map(|name| name.to_string()).collect(),
                create_outcome,
                fail_listing: false,
                create_calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl Registry for FakeRegistry {
        async fn repository_names(&self) -> Result<Vec<String>, AppError> {
            if self.fail_listing {
                return Err(AppError::RegistryError("listing unavailable".to_string()));
            }
            Ok(self.names.clone())
        }

        async fn create_repository(&self, name: &str) -> Result<EnsureOutcome, AppError> {
            self.create_calls.lock().unwrap().push(name.to_string());
            match &self.create_outcome {
                Some(outcome) => Ok(outcome.clone()),
                None => Err(AppError::RegistryError("create rejected".to_string())),
            }
        }
    }

    fn created(name: &str) -> EnsureOutcome {
        EnsureOutcome::Created(RepositoryDescriptor {
            name: name.to_string(),
            uri: Some(format!(
                "123456789012.dkr.ecr.us-east-1.amazonaws.com/{name}"
            )),
        })
    }

    #[tokio::test]
    async fn existing_name_skips_the_create_call() {
        let registry = FakeRegistry::new(&["monitor-dashboard", "other"], None);

        let outcome = ensure_repository(&registry, "monitor-dashboard").await.unwrap();

        assert_eq!(outcome, EnsureOutcome::AlreadyExists);
        assert!(registry.create_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn absent_name_is_created_with_uri() {
        let registry = FakeRegistry::new(&["other"], Some(created("monitor-dashboard")));

        let outcome = ensure_repository(&registry, "monitor-dashboard").await.unwrap();

        match outcome {
            EnsureOutcome::Created(repository) => {
                assert_eq!(repository.name, "monitor-dashboard");
                assert!(repository.uri.unwrap().contains("monitor-dashboard"));
            }
            EnsureOutcome::AlreadyExists => panic!("expected a create"),
        }
        assert_eq!(
            *registry.create_calls.lock().unwrap(),
            vec!["monitor-dashboard".to_string()]
        );
    }

    #[tokio::test]
    async fn lost_create_race_reports_already_exists() {
        let registry = FakeRegistry::new(&[], Some(EnsureOutcome::AlreadyExists));

        let outcome = ensure_repository(&registry, "monitor-dashboard").await.unwrap();

        assert_eq!(outcome, EnsureOutcome::AlreadyExists);
        assert_eq!(registry.create_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn listing_failure_surfaces_the_provider_error() {
        let mut registry = FakeRegistry::new(&[], None);
        registry.fail_listing = true;

        let result = ensure_repository(&registry, "monitor-dashboard").await;

        assert!(result.is_err());
        assert!(registry.create_calls.lock().unwrap().is_empty());
    }
}
