//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;

/// Install the global subscriber.
///
/// `RUST_LOG` picks the filter (default `info,groups=debug`), `LOG_FORMAT=json` switches stdout to
/// JSON lines, and `LOG_DIR` adds a daily rolling `groups.log` file next to stdout.
pub fn init_telemetry() -> Result<(), AppError> {
    let log_level = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,groups=debug".to_string());
    let filter = EnvFilter::try_new(&log_level)
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;
    let json = std::env::var("LOG_FORMAT").map(|f| f == "json").unwrap_or(false);

    let file_layer = match std::env::var("LOG_DIR") {
        Ok(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("groups")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?;
            Some(
                fmt::layer()
                    .with_writer(appender)
                    .with_target(true)
                    .with_ansi(false),
            )
        }
        Err(_) => None,
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if json {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().pretty().with_target(true))
            .try_init()
    }
    .map_err(|e| AppError::TelemetryError(e.to_string()))
}
