//! Index API methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;

impl SplunkClient {
    /// List the names of all indexes visible to the token.
    pub async fn list_indexes(&self) -> Result<Vec<String>> {
        endpoints::list_indexes(&self.http, &self.base_url, self.token()).await
    }
}
