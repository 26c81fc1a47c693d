//! Error types for edupilot_app

use edupilot_core::CyclerError;
use edupilot_widgets::Route;
use thiserror::Error;

/// Errors surfaced by the application layer
#[derive(Error, Debug)]
pub enum AppError {
    /// A primitive rejected a call or its construction
    #[error(transparent)]
    Cycler(#[from] CyclerError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// A member-only route was requested before login
    #[error("route `{0}` requires a logged-in session")]
    NotLoggedIn(Route),

    /// The command targets a view that is not mounted
    #[error("{expected} view is not mounted")]
    ViewNotMounted { expected: &'static str },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Config(format!("{err:#}"))
    }
}

/// Result type for edupilot_app operations
pub type Result<T> = std::result::Result<T, AppError>;
