//! Tracing initialization.
//!
//! Sets up tracing-subscriber with console output and an `EnvFilter` driven
//! by `RUST_LOG` (default `info`). There is no exporter here; operational
//! logs go to stdout and whatever collects them is the deployment's concern.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
