use serde::Serialize;

/// Template context for `index.html`.
#[derive(Serialize, Debug)]
pub struct DashboardContext {
    pub cpu_metric: f64,
    pub mem_metric: f64,
    /// Formatted reading, or "N/A" when the host exposes no sensor.
    pub cpu_temp: String,
    pub message: Option<&'static str>,
    pub sampled_at: String,
}
