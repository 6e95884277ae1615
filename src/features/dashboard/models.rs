use chrono::{DateTime, Utc};
use serde::Serialize;

pub const LOAD_THRESHOLD: f64 = 80.0;
pub const TEMPERATURE_THRESHOLD: f64 = 75.0;

pub const HIGH_LOAD_WARNING: &str = "High CPU or Memory Usage! Consider scaling up.";
pub const HIGH_TEMPERATURE_WARNING: &str =
    "CPU Temperature is too high! Consider cooling measures.";

/// One sample of host metrics, taken fresh per request.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    /// `None` on hosts without a readable core temperature sensor.
    pub cpu_temp: Option<f64>,
    pub sampled_at: DateTime<Utc>,
}

/// Threshold rules for the dashboard banner. The load check runs first;
/// a temperature reading over its limit overwrites the result, so only
/// one message is ever shown.
pub fn alert_message(snapshot: &MetricsSnapshot) -> Option<&'static str> {
    let mut message = None;

    if snapshot.cpu_percent > LOAD_THRESHOLD || snapshot.memory_percent > LOAD_THRESHOLD {
        message = Some(HIGH_LOAD_WARNING);
    }
    if let Some(temp) = snapshot.cpu_temp {
        if temp > TEMPERATURE_THRESHOLD {
            message = Some(HIGH_TEMPERATURE_WARNING);
        }
    }

    message
}
