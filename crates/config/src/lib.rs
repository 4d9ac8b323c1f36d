//! Configuration management for splunk-fields.
//!
//! This crate loads the Splunk connection settings from the process
//! environment (optionally seeded from a `.env` file) and validates them
//! before any network client is constructed.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig};
