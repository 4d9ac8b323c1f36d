//! Sourcetype and field API methods for [`SplunkClient`].
//!
//! # What this module handles:
//! - Discovering sourcetypes that hold data
//! - Listing the field names of one sourcetype
//!
//! # What this module does NOT handle:
//! - SPL construction and result parsing (in [`crate::endpoints`])

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Sourcetype;

impl SplunkClient {
    /// List sourcetypes with indexed data, each with the indexes it appears in.
    pub async fn list_sourcetypes(&self) -> Result<Vec<Sourcetype>> {
        endpoints::list_sourcetypes(&self.http, &self.base_url, self.token()).await
    }

    /// List the field names of `sourcetype`, internal `_*` fields excluded.
    pub async fn list_fields(&self, sourcetype: &Sourcetype) -> Result<Vec<String>> {
        endpoints::list_fields(&self.http, &self.base_url, self.token(), sourcetype).await
    }
}
