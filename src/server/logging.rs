//! Logging initialization.
//!
//! - **JSON** (`LOG_JSON=true`): one JSON object per line for log shippers
//! - **Default**: compact human-readable lines on stdout

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured `LOG_LEVEL` directive is used.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::ConfigErr(InvalidLogFilter))` - The filter directive could not be parsed
pub fn init(config: &Config) -> Result<(), AppError> {
    let env_filter = build_filter(&config.log_level)?;

    if config.log_json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .init();
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .init();
    }

    Ok(())
}

fn build_filter(log_level: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| ConfigError::InvalidLogFilter(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_module_directives() {
        assert!(build_filter("info,motorbike_rental=debug,sqlx=warn").is_ok());
    }
}
