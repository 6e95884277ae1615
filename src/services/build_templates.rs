use std::sync::Arc;

use tera::{Context, Tera};

use shared::utilities::errors::AppError;

#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    /// Build the Tera instance with the dashboard template compiled in.
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", include_str!("../../templates/index.html"))?;
        Ok(Templates {
            tera: Arc::new(tera),
        })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, AppError> {
        Ok(self.tera.render(name, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::features::dashboard::models::HIGH_LOAD_WARNING;
    use crate::features::dashboard::schemas::DashboardContext;

    fn render(context: DashboardContext) -> String {
        let templates = Templates::new().unwrap();
        let context = Context::from_serialize(context).unwrap();
        templates.render("index.html", &context).unwrap()
    }

    #[test]
    fn renders_metrics_and_warning_banner() {
        let page = render(DashboardContext {
            cpu_metric: 85.0,
            mem_metric: 50.0,
            cpu_temp: "N/A".to_string(),
            message: Some(HIGH_LOAD_WARNING),
            sampled_at: "2026-01-01 00:00:00 UTC".to_string(),
        });

        assert!(page.contains("85"));
        assert!(page.contains("N/A"));
        assert!(page.contains(HIGH_LOAD_WARNING));
    }

    #[test]
    fn omits_banner_when_no_message() {
        let page = render(DashboardContext {
            cpu_metric: 10.0,
            mem_metric: 10.0,
            cpu_temp: "10.0".to_string(),
            message: None,
            sampled_at: "2026-01-01 00:00:00 UTC".to_string(),
        });

        assert!(!page.contains("class=\"alert\""));
    }
}
