pub mod alerts;
pub mod categories;
pub mod config;
pub mod del;
pub mod list;
pub mod refill;
pub mod show;

use crate::config::Config;
use crate::core::Session;
use crate::errors::{AppError, AppResult};
use crate::models::StatusFilter;
use crate::ui::TerminalNotifier;

/// Fresh one-shot session over the seed dataset.
pub fn open_session(cfg: &Config) -> AppResult<Session<TerminalNotifier>> {
    Session::new(cfg.clone(), TerminalNotifier::new())
}

/// Same, without the startup alert (for machine-readable or alert output).
pub fn open_quiet_session(cfg: &Config) -> AppResult<Session<TerminalNotifier>> {
    let cfg = Config {
        low_quantity_alert: false,
        ..cfg.clone()
    };
    open_session(&cfg)
}

pub fn parse_status(s: &str) -> AppResult<StatusFilter> {
    StatusFilter::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
}

pub fn parse_switch(s: &str) -> AppResult<bool> {
    match s.trim().to_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        other => Err(AppError::InvalidSwitch(other.to_string())),
    }
}
