//! Centralized error handling for m3u-scout
//!
//! A single `AppError` enum covers every failure the library surfaces.
//! Transport-level failures are a special case: the HTTP fetcher retries them
//! internally and degrades to `None` rather than returning an error, so the
//! `Http` variant only shows up in logs, never across the fetcher boundary.

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
