use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Builds the env filter: `RUST_LOG`
/// first, then `fallback`.
pub fn env_filter(
  fallback: &str
) -> anyhow::Result<EnvFilter> {
  EnvFilter::try_from_default_env()
    .or_else(|_| {
      EnvFilter::try_new(fallback)
    })
    .map_err(|e| {
      anyhow!(
        "invalid RUST_LOG / log \
         filter: {e}"
      )
    })
}
