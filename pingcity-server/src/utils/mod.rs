//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] - application error type with HTTP mapping
//! - [`AppResult`] - handler result alias
//! - validation and logging helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
