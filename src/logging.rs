use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr so stdout only carries the report.
///
/// The level applies to this crate; `RUST_LOG` overrides it entirely.
///
/// # Errors
/// Fails if `level` is not a valid filter directive or a global subscriber is
/// already installed.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("airfoil_lift={level}");
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&default_filter)?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!(filter = %default_filter, "logging initialized");
    Ok(())
}
