use axum::extract::FromRef;

use shared::utilities::config::Config;

use crate::services::{build_sampler::Sampler, build_templates::Templates};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sampler: Sampler,
    pub templates: Templates,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Sampler {
    fn from_ref(state: &AppState) -> Self {
        state.sampler.clone()
    }
}

impl FromRef<AppState> for Templates {
    fn from_ref(state: &AppState) -> Self {
        state.templates.clone()
    }
}
