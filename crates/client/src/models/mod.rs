//! Data models for Splunk API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod common;
pub mod indexes;
pub mod search;
pub mod sourcetypes;

pub use common::{Entry, MessageType, SplunkMessage, SplunkMessages, SplunkResponse};
pub use indexes::IndexListResponse;
pub use search::{OneshotResults, SearchRow};
pub use sourcetypes::Sourcetype;
