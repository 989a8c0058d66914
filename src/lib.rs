//! IPTV channel catalog tooling.
//!
//! Two independent utilities share this library:
//!
//! - the **scraper**: discovers streaming channel numbers on a third-party
//!   site, resolves per-channel metadata, and emits a JSON catalog plus an
//!   M3U playlist ([`scraper`] and [`playlist::emitter`]);
//! - the **re-tagger**: rewrites `group-title` attributes in an existing M3U
//!   playlist based on channel-name prefixes ([`playlist::retag`]).
//!
//! Everything runs sequentially: one request at a time, fixed sleeps as the
//! rate limiter, no shared mutable state beyond the in-process catalog.

pub mod config;
pub mod errors;
pub mod models;
pub mod playlist;
pub mod scraper;
pub mod utils;

pub use errors::{AppError, AppResult};
pub use models::ChannelRecord;
