use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr subscriber. Stdout carries only benchmark lines.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`. Calling this twice
/// is harmless; the second install is ignored.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
