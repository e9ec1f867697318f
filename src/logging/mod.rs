// Logging setup
//
// stdout carries the rendered theme script, so every log line goes to stderr.
// Precedence for the filter: RUST_LOG env var > config file > default "warn".

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Filter directive for our own crate at the configured level
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("termtheme={}", config.level)
}

/// Install the global tracing subscriber. Call once, at startup.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_uses_config_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Json,
        };
        assert_eq!(default_directive(&config), "termtheme=debug");
        assert!(default_directive(&config).parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
