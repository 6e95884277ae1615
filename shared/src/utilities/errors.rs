use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Environment variable {0} not set error")]
    EnvironmentVariableNotSetError(String),
    #[error("File read error, {0}")]
    FileReadError(String),
    #[error("IO error, {0}")]
    IoError(#[from] std::io::Error),
    #[error("Template render error, {0}")]
    TemplateError(#[from] tera::Error),
    #[error("Serde json error")]
    SerdejsonError(#[from] serde_json::Error),
    #[error("Registry error, {0}")]
    RegistryError(String),
    #[error("Kube error")]
    KubeError(#[from] kube::Error),
    #[error("Kubeconfig error, {0}")]
    KubeconfigError(#[from] kube::config::KubeconfigError),
    #[error("In-cluster config error, {0}")]
    InClusterError(#[from] kube::config::InClusterError),
    #[error("No cluster credential source could be loaded")]
    ClusterCredentialsError,
    #[error("Internal error, {0}")]
    InternalError(String),
    #[error("External service error, {0}")]
    ExternalServiceError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::EnvironmentVariableNotSetError(name) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Environment variable {} not set error", name),
            ),
            Self::FileReadError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
            Self::IoError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::TemplateError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::SerdejsonError(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Self::RegistryError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
            Self::KubeError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::KubeconfigError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::InClusterError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::ClusterCredentialsError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No cluster credential source could be loaded".to_string(),
            ),
            Self::InternalError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
            Self::ExternalServiceError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        let body = Json(json!({"error": error_message}));

        (status, body).into_response()
    }
}
