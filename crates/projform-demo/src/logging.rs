#![forbid(unsafe_code)]

//! Tracing subscriber setup.
//!
//! Logs always go to stderr so stdout carries only emitted records.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Filter used when neither `PROJFORM_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Pick the filter directive: `PROJFORM_LOG`, then `RUST_LOG`, then the default.
pub fn filter_directive<F>(mut get_env: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get_env("PROJFORM_LOG")
        .or_else(|| get_env("RUST_LOG"))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed; that one is kept.
pub fn init(format: LogFormat) -> bool {
    let directive = filter_directive(|key| env::var(key).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("Ignoring log filter {directive:?}: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    match installed {
        Ok(()) => {
            tracing::debug!(filter = %directive, ?format, "logging initialized");
            true
        }
        Err(err) => {
            tracing::debug!(%err, "subscriber already set, keeping it");
            false
        }
    }
}
