use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use tokio::fs;
use tracing::Level;

use crate::utilities::errors::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addres: String,
    pub tracing_level: Level,
}

impl Config {
    pub async fn init() -> Result<Self, AppError> {
        let server_addres = get_config_value(
            "SERVER_ADDRES",
            Some("SERVER_ADDRES"),
            None,
            Some("0.0.0.0:8001".to_string()),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("SERVER_ADDRES".to_string()))?;

        let tracing_level = get_config_value(
            "TRACING_LEVEL",
            Some("TRACING_LEVEL"),
            None,
            Some(Level::INFO),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("TRACING_LEVEL".to_string()))?;

        Ok(Config {
            server_addres,
            tracing_level,
        })
    }
}

/// Try to resolve config value from Docker secrets, file path, or env var.
/// - `secret_name` → filename inside `/run/secrets/`
/// - `env_name` → optional environment variable key
/// - `fallback_path` → fallback file path (checked if exists)
///
/// Returns parsed `T` if found and successfully parsed.
pub async fn get_config_value<T>(
    secret_name: &str,
    env_name: Option<&str>,
    fallback_path: Option<&PathBuf>,
    fallback: Option<T>,
) -> Result<Option<T>, AppError>
where
    T: FromStr,
{
    // 1. Docker secrets
    let docker_secret = Path::new("/run/secrets").join(secret_name);
    if docker_secret.exists() {
        match fs::read_to_string(&docker_secret).await {
            Ok(content) => {
                if let Ok(parsed) = T::from_str(content.trim()) {
                    return Ok(Some(parsed));
                }
            }
            Err(e) => {
                return Err(AppError::FileReadError(format!(
                    "Failed to read docker secret at {0}, {e}",
                    docker_secret.display()
                )));
            }
        }
    }

    // 2. Env var
    if let Some(env_key) = env_name
        && let Ok(val) = std::env::var(env_key)
        && let Ok(parsed) = T::from_str(val.trim())
    {
        return Ok(Some(parsed));
    }

    // 3. Fallback file path
    if let Some(path) = fallback_path
        && path.exists()
    {
        match fs::read_to_string(path).await {
            Ok(content) => {
                if let Ok(parsed) = T::from_str(content.trim()) {
                    return Ok(Some(parsed));
                }
            }
            Err(e) => {
                return Err(AppError::FileReadError(format!(
                    "Failed to read fallback file at {}, {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    // 4. Final fallback
    Ok(fallback)
}
