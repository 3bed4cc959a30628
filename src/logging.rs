//! Diagnostic logging through `tracing`.
//!
//! Output goes to stderr so it never mixes with the cabinet itself.
//! `RUST_LOG` overrides the level picked from `-v`.
//!
//! - default: `warn`
//! - `-v`: `info` (mutations, alerts)
//! - `-vv`: `debug` (recomputes, store replacements)

use crate::errors::{AppError, AppResult};
use std::io;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        };
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Install the global subscriber. Call once, at startup.
pub fn init_logging(config: &LogConfig) -> AppResult<()> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .map_err(|e| AppError::Other(format!("logging: {e}")))
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        // other crates stay at warn
        EnvFilter::new(format!("warn,medcabinet={level}"))
    })
}
