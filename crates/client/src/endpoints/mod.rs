//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP request. Failed requests are not
//! retried; status codes are classified into [`crate::error::ClientError`].

mod fields;
mod indexes;
mod request;
pub mod search;
mod sourcetypes;

pub use fields::{build_field_query, collect_field_names, list_fields};
pub use indexes::list_indexes;
pub use request::send_request;
pub use search::{quote_spl, run_oneshot};
pub use sourcetypes::{SOURCETYPE_DISCOVERY_QUERY, list_sourcetypes};
