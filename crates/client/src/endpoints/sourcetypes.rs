//! Sourcetype discovery endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::run_oneshot;
use crate::error::Result;
use crate::models::Sourcetype;

/// Every (index, sourcetype) pair that holds data, via the tstats index summaries.
pub const SOURCETYPE_DISCOVERY_QUERY: &str =
    "| tstats count where index=* by index, sourcetype | fields - count";

/// List sourcetypes that have indexed data, each with the indexes it appears in.
///
/// Sourcetypes are returned in the order Splunk first reports them.
pub async fn list_sourcetypes(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Vec<Sourcetype>> {
    let rows = run_oneshot(client, base_url, auth_token, SOURCETYPE_DISCOVERY_QUERY).await?;
    let sourcetypes = Sourcetype::group_rows(&rows);

    debug!(
        "Discovered {} sourcetypes from {} index/sourcetype pairs",
        sourcetypes.len(),
        rows.len()
    );
    Ok(sourcetypes)
}
