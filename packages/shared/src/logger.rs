//! Logging setup utilities for the Fuda binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Both the server library crate and the binary log at `default_log_level`.
/// `tower_http` request traces are enabled at the same level.
/// The filter can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "fuda_server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use fuda_shared::logger::setup_logger;
///
/// setup_logger("fuda_server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the filter directive used when `RUST_LOG` is not set.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let mut targets = vec![
        "fuda_server".to_string(),
        binary_name.replace('-', "_"),
        "tower_http".to_string(),
    ];
    // the server binary shares its crate name with the library
    targets.dedup();

    targets
        .iter()
        .map(|target| format!("{target}={default_log_level}"))
        .collect::<Vec<_>>()
        .join(",")
}
