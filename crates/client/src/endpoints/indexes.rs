//! Index listing endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::read_json;
use crate::endpoints::send_request;
use crate::error::Result;
use crate::models::IndexListResponse;

const INDEXES_PATH: &str = "/services/data/indexes";

/// List the names of all indexes visible to the token.
///
/// `count=0` asks Splunk for every entry in a single page.
pub async fn list_indexes(client: &Client, base_url: &str, auth_token: &str) -> Result<Vec<String>> {
    let url = format!("{}{}", base_url, INDEXES_PATH);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("output_mode", "json"), ("count", "0")]);
    let response = send_request(builder, INDEXES_PATH, "GET").await?;

    let resp: IndexListResponse = read_json(response, "index list").await?;

    let names = resp.into_names();
    debug!("Listed {} indexes", names.len());
    Ok(names)
}
