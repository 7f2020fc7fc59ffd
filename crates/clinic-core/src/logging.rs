//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise the configured level applies.
//!
//! ```ignore
//! use clinic_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new("debug").with_target(false).init();
//! tracing::info!("Landing page starting");
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    default_level: String,
    with_target: bool,
    with_ansi: bool,
}

impl LoggingBuilder {
    pub fn new(default_level: impl Into<String>) -> Self {
        Self {
            default_level: default_level.into(),
            with_target: true,
            with_ansi: true,
        }
    }

    /// Include the event target (module path) in each line.
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Colorize output.
    pub fn with_ansi(mut self, with_ansi: bool) -> Self {
        self.with_ansi = with_ansi;
        self
    }

    /// The filter that `init` will install.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Install the subscriber. Returns `false` if one was already set.
    pub fn init(self) -> bool {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(self.with_target)
            .with_ansi(self.with_ansi);
        tracing_subscriber::registry()
            .with(self.filter())
            .with(fmt_layer)
            .try_init()
            .is_ok()
    }
}
