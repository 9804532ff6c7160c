//! TelData Core: shared error type and build configuration.

pub mod config;
pub mod error;

pub use config::BuildConfig;
pub use error::{Error, Result};
