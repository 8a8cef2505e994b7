//! Tracing subscriber setup shared by the binaries.
//!
//! Logs go to stderr; stdout belongs to command output and the RPC channel.
//! The subscriber is installed before anything else runs, so events from
//! opening the database and loading settings are kept. The configured level
//! is applied afterwards through [`LogHandle::apply_level`].

use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Fallback filter when neither `RUST_LOG` nor the settings name one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Handle to the installed filter.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Replaces the filter with `level` unless `RUST_LOG` was set at startup.
    pub fn apply_level(&self, level: &str) {
        if self.from_env {
            return;
        }
        let filter = match EnvFilter::try_new(level) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(level, error = %e, "ignoring invalid log level");
                return;
            }
        };
        if let Err(e) = self.filter.reload(filter) {
            tracing::warn!(error = %e, "failed to apply log level");
        }
    }
}

/// Installs the global fmt subscriber with `RUST_LOG`, or [`DEFAULT_LEVEL`].
///
/// Calling this twice is harmless; only the first subscriber is installed.
pub fn init() -> LogHandle {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(f) => (f, true),
        Err(_) => (EnvFilter::new(DEFAULT_LEVEL), false),
    };
    let (filter_layer, handle) = reload::Layer::new(filter);

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    LogHandle {
        filter: handle,
        from_env,
    }
}
