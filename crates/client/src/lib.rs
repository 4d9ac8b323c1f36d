//! Splunk REST API client.
//!
//! This crate provides a small, type-safe client for the parts of the Splunk
//! management API needed to build a field catalog: listing indexes,
//! discovering sourcetypes, and extracting the field names of a sourcetype.
//! Authentication is by bearer API token.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use error::{ClientError, Result};
pub use models::Sourcetype;
