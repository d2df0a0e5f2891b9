use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::error::{CytoError, Result};

/// Installs the global subscriber. `RUST_LOG` wins over `level`, which
/// defaults to `info`. Logs go to stderr so stdout stays clean for tables.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let default_level = level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CytoError::Logging(err.to_string()))?;

    Ok(())
}
