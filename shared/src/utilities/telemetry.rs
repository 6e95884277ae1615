use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber for a binary. `RUST_LOG` overrides the
/// configured level when set.
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
