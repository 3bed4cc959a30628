//! Unified application error type.
//! All modules (core, cli, config, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Scope errors
    // ---------------------------
    #[error("Prescription store accessed outside its owning scope")]
    OutsideScope,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid status filter: {0} (use active, inactive or all)")]
    InvalidStatus(String),

    #[error("Invalid switch value: {0} (use on or off)")]
    InvalidSwitch(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No prescription found with id {0}")]
    PrescriptionNotFound(String),

    #[error("{0} is not eligible for auto-refill")]
    NotEligible(String),

    #[error("No prescription selected")]
    NoSelection,

    #[error("No deletion is waiting for confirmation")]
    NoPendingDeletion,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors that mean the component tree is wired wrong, as opposed to
    /// something the user did. These are never recovered in place.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::OutsideScope | AppError::Config(_) | AppError::ConfigLoad | AppError::Other(_)
        )
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
