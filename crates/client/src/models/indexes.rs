//! Index listing models.

use serde::de::IgnoredAny;

use super::common::SplunkResponse;

/// Response of `GET /services/data/indexes`.
///
/// Index content is not needed; only entry names are kept.
pub type IndexListResponse = SplunkResponse<IgnoredAny>;

impl IndexListResponse {
    /// Index names in the order Splunk returned them.
    pub fn into_names(self) -> Vec<String> {
        self.entry.into_iter().map(|e| e.name).collect()
    }
}
