//! Last line of defence around each interaction turn.
//!
//! Recoverable errors are reported and the session carries on. Fatal errors
//! and panics are logged, the fallback screen replaces the output and the
//! boundary stays crashed until the caller restarts.

use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

#[derive(Debug)]
pub enum Turn<T> {
    Done(T),
    /// Reported to the user; state is still usable.
    Failed(AppError),
    /// Fallback screen shown; a restart is required.
    Crashed(String),
}

impl<T> Turn<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Turn::Done(_))
    }
}

#[derive(Debug, Default)]
pub struct RecoveryBoundary {
    crashed: bool,
}

impl RecoveryBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    /// Clear the crashed flag after the caller rebuilt its state.
    pub fn restart(&mut self) {
        self.crashed = false;
    }

    pub fn run<T>(&mut self, turn: impl FnOnce() -> AppResult<T>) -> Turn<T> {
        match panic::catch_unwind(AssertUnwindSafe(turn)) {
            Ok(Ok(value)) => Turn::Done(value),
            Ok(Err(e)) if !e.is_fatal() => {
                messages::error(&e);
                Turn::Failed(e)
            }
            Ok(Err(e)) => self.crash(e.to_string()),
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                self.crash(reason)
            }
        }
    }

    fn crash<T>(&mut self, reason: String) -> Turn<T> {
        error!(%reason, "uncaught error, showing fallback");
        self.crashed = true;
        fallback_screen();
        Turn::Crashed(reason)
    }
}

pub fn fallback_screen() {
    messages::header("Oops! Something went wrong");
    println!("The application encountered an unexpected error.");
    println!("Type `restart` to reload the cabinet, or run the command again.");
}
