//! Shared utilities

pub mod config;
pub mod error;
pub mod time;

pub use config::StudioConfig;
pub use error::{AppError, AppResult, ErrorResponse};
