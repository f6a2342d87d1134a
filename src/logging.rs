use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Sends logs to stderr so stdout only ever carries the `Installed:` line.
///
/// The level defaults to `warn` and can be raised with `RUST_LOG`.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
