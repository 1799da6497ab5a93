//! Log subscriber setup for the `reclass` binary.
//!
//! Logging stays off unless `RECLASS_LOG` (or `RUST_LOG`) carries filter
//! directives. `RECLASS_LOG_FORMAT` picks the rendering:
//!
//! | value | layer |
//! |-------|-------|
//! | `text` (default) | `tracing_subscriber::fmt` lines |
//! | `tree` | `tracing_tree::HierarchicalLayer`, one indent per conversion span |
//! | `json` | newline-delimited JSON events |
//!
//! ```bash
//! RECLASS_LOG=debug RECLASS_LOG_FORMAT=tree reclass program.json
//! RECLASS_LOG="reclass_emitter::transforms=trace" reclass program.json
//! ```
//!
//! Everything is written to stderr; stdout carries only converted JSON.

use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "RECLASS_LOG";
const FALLBACK_LOG_VAR: &str = "RUST_LOG";
const FORMAT_VAR: &str = "RECLASS_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown or empty names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("tree") {
            Self::Tree
        } else if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        match self {
            Self::Text => Box::new(fmt::layer().with_writer(std::io::stderr)),
            Self::Json => Box::new(fmt::layer().json().with_writer(std::io::stderr)),
            Self::Tree => Box::new(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true),
            ),
        }
    }
}

/// Logging configuration read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directives; `None` disables logging.
    pub directives: Option<String>,
    pub format: LogFormat,
}

impl LogSettings {
    /// `reclass_log` wins over `rust_log` when both are present.
    pub fn from_values(
        reclass_log: Option<String>,
        rust_log: Option<String>,
        format: Option<&str>,
    ) -> Self {
        Self {
            directives: reclass_log.or(rust_log),
            format: format.map(LogFormat::parse).unwrap_or_default(),
        }
    }

    pub fn from_env() -> Self {
        let format = std::env::var(FORMAT_VAR).ok();
        Self::from_values(
            std::env::var(LOG_VAR).ok(),
            std::env::var(FALLBACK_LOG_VAR).ok(),
            format.as_deref(),
        )
    }
}

/// Install the global subscriber described by the environment, if any.
pub fn init_tracing() {
    let settings = LogSettings::from_env();
    let Some(directives) = settings.directives else {
        return;
    };

    tracing_subscriber::registry()
        .with(settings.format.layer())
        .with(EnvFilter::builder().parse_lossy(directives))
        .init();
}
