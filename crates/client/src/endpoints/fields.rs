//! Field extraction endpoint.
//!
//! Fields are discovered by searching the sourcetype's events, dropping
//! internal `_*` fields, and summarizing with `fieldsummary` so that every
//! field seen in any matching event becomes one result row.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{quote_spl, run_oneshot};
use crate::error::Result;
use crate::models::search::cell_strings;
use crate::models::{SearchRow, Sourcetype};

/// Build the SPL that lists the field names of `sourcetype`.
///
/// The search is scoped to the indexes the sourcetype was observed in, or to
/// `index=*` when none are known.
pub fn build_field_query(sourcetype: &Sourcetype) -> String {
    let index_scope = if sourcetype.indexes.is_empty() {
        "index=*".to_string()
    } else {
        let terms: Vec<String> = sourcetype
            .indexes
            .iter()
            .map(|index| format!("index={}", quote_spl(index)))
            .collect();
        format!("({})", terms.join(" OR "))
    };

    format!(
        "search {} sourcetype={} | fields - _* | fieldsummary | fields field",
        index_scope,
        quote_spl(&sourcetype.name)
    )
}

/// Collect distinct field names from `fieldsummary` result rows.
///
/// Order of first appearance is preserved. Internal names (leading `_`) and
/// empty names are dropped.
pub fn collect_field_names(rows: &[SearchRow]) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();

    for row in rows {
        for value in row.values() {
            for name in cell_strings(value) {
                if name.is_empty() || name.starts_with('_') {
                    continue;
                }
                if !fields.iter().any(|f| f == name) {
                    fields.push(name.to_string());
                }
            }
        }
    }

    fields
}

/// List the field names extracted for one sourcetype.
pub async fn list_fields(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sourcetype: &Sourcetype,
) -> Result<Vec<String>> {
    let query = build_field_query(sourcetype);
    let rows = run_oneshot(client, base_url, auth_token, &query).await?;
    let fields = collect_field_names(&rows);

    debug!(
        "Sourcetype '{}' has {} fields",
        sourcetype.name,
        fields.len()
    );
    Ok(fields)
}
