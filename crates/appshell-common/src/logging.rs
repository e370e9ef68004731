/// Logging setup for the appshell server
///
/// Installs a `tracing` subscriber with an env filter. Records emitted through the
/// `log` facade (as the web crate does) are forwarded into the same subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::error::{Result, ShellError};

/// Crates whose chatter is capped at `warn` unless `RUST_LOG` says otherwise
const QUIET_TARGETS: &[&str] = &["hyper", "tower_http", "leptos_axum"];

/// Build the filter: `RUST_LOG` wins, otherwise the configured level plus quiet targets
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(env_filter) = std::env::var(EnvFilter::DEFAULT_ENV) {
        return EnvFilter::try_new(env_filter).map_err(|e| ShellError::logging(e.to_string()));
    }

    let mut filter = EnvFilter::try_new(config.level.to_ascii_lowercase())
        .map_err(|e| ShellError::logging(e.to_string()))?;

    for target in QUIET_TARGETS {
        let directive = format!("{}=warn", target)
            .parse()
            .map_err(|e: tracing_subscriber::filter::ParseError| ShellError::logging(e.to_string()))?;
        filter = filter.add_directive(directive);
    }

    Ok(filter)
}

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let fmt_layer = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ShellError::logging(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_from_config() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            return;
        }

        let filter = build_filter(&LoggingConfig::default()).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("info"));
        assert!(rendered.contains("hyper=warn"));
    }

    #[test]
    fn test_build_filter_rejects_garbage_level() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            return;
        }

        let config = LoggingConfig {
            level: "appshell=loud".to_string(),
            json: false,
        };
        assert!(matches!(build_filter(&config), Err(ShellError::Logging(_))));
    }
}
