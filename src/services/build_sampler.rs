use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use sysinfo::{Components, System};
use tokio::sync::Mutex;

use crate::features::dashboard::models::MetricsSnapshot;

/// Sensor group carrying the CPU core temperature on hosts that expose one.
const SENSOR_GROUP: &str = "coretemp";

const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct Sampler {
    system: Arc<Mutex<System>>,
}

impl Sampler {
    pub fn new() -> Self {
        Sampler {
            system: Arc::new(Mutex::new(System::new())),
        }
    }

    /// Sample CPU, memory and core temperature. Holds the request for the
    /// duration of the sampling window; concurrent requests queue on the
    /// shared `System`.
    pub async fn sample(&self) -> MetricsSnapshot {
        let mut system = self.system.lock().await;

        system.refresh_cpu_usage();
        tokio::time::sleep(SAMPLE_WINDOW).await;
        system.refresh_cpu_usage();
        let cpu_percent = round2(system.global_cpu_info().cpu_usage() as f64);

        system.refresh_memory();
        let memory_percent = if system.total_memory() == 0 {
            0.0
        } else {
            round2(system.used_memory() as f64 / system.total_memory() as f64 * 100.0)
        };
        drop(system);

        MetricsSnapshot {
            cpu_percent,
            memory_percent,
            cpu_temp: core_temperature(),
            sampled_at: Utc::now(),
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Current core temperature, or `None` when the sensor group is absent.
fn core_temperature() -> Option<f64> {
    let components = Components::new_with_refreshed_list();
    components
        .iter()
        .find(|component| component.label().starts_with(SENSOR_GROUP))
        .map(|component| component.temperature() as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
