//! Field extraction pipeline.
//!
//! Responsibilities:
//! - Walk the catalog in order: indexes, then sourcetypes, then the fields of
//!   each sourcetype.
//! - Assemble the [`ResultSet`] and record per-sourcetype failures.
//!
//! Does NOT handle:
//! - HTTP or SPL details (see `splunk_client`).
//! - Persisting results (see `output`).
//!
//! Invariants:
//! - Requests are issued one at a time, in the order Splunk returned the
//!   sourcetypes.
//! - Failing to list indexes or sourcetypes aborts the run.
//! - An authentication failure on any sourcetype aborts the run; every other
//!   per-sourcetype error is recorded and the run continues.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use splunk_client::{ClientError, Sourcetype, SplunkClient};
use tracing::{error, info, warn};

/// Read-only view of a Splunk catalog.
///
/// Implemented by [`SplunkClient`]; tests substitute an in-memory catalog.
pub trait CatalogSource {
    async fn list_indexes(&self) -> Result<Vec<String>, ClientError>;

    async fn list_sourcetypes(&self) -> Result<Vec<Sourcetype>, ClientError>;

    async fn list_fields(&self, sourcetype: &Sourcetype) -> Result<Vec<String>, ClientError>;
}

impl CatalogSource for SplunkClient {
    async fn list_indexes(&self) -> Result<Vec<String>, ClientError> {
        SplunkClient::list_indexes(self).await
    }

    async fn list_sourcetypes(&self) -> Result<Vec<Sourcetype>, ClientError> {
        SplunkClient::list_sourcetypes(self).await
    }

    async fn list_fields(&self, sourcetype: &Sourcetype) -> Result<Vec<String>, ClientError> {
        SplunkClient::list_fields(self, sourcetype).await
    }
}

/// Sourcetype name to field names, in the order they were discovered.
///
/// Only the pipeline inserts; once returned the set is read-only. Serializes
/// as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(IndexMap<String, Vec<String>>);

impl ResultSet {
    fn insert(&mut self, sourcetype: String, fields: Vec<String>) {
        self.0.insert(sourcetype, fields);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of field names across all sourcetypes.
    pub fn field_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// A sourcetype whose fields could not be fetched.
#[derive(Debug)]
pub struct SourcetypeFailure {
    pub sourcetype: String,
    pub error: ClientError,
}

/// Everything one extraction run produced.
#[derive(Debug)]
pub struct ExtractionReport {
    pub indexes: Vec<String>,
    pub result_set: ResultSet,
    pub failures: Vec<SourcetypeFailure>,
}

/// Drives a [`CatalogSource`] through one extraction pass.
pub struct ExtractionPipeline<'a, S> {
    source: &'a S,
}

impl<'a, S: CatalogSource> ExtractionPipeline<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Run the extraction once.
    ///
    /// # Errors
    ///
    /// Returns the client error (with context) when indexes or sourcetypes
    /// cannot be listed, or when a field request is rejected as unauthorized.
    pub async fn run(&self) -> Result<ExtractionReport> {
        info!("Listing indexes");
        let indexes = self
            .source
            .list_indexes()
            .await
            .inspect_err(|e| error!(status = ?e.status(), error = %e, "Failed to list indexes"))
            .context("Failed to list indexes")?;
        info!(count = indexes.len(), "Listed indexes");

        info!("Discovering sourcetypes");
        let sourcetypes = self
            .source
            .list_sourcetypes()
            .await
            .inspect_err(|e| error!(status = ?e.status(), error = %e, "Failed to list sourcetypes"))
            .context("Failed to list sourcetypes")?;
        info!(count = sourcetypes.len(), "Discovered sourcetypes");

        let mut result_set = ResultSet::default();
        let mut failures = Vec::new();

        for sourcetype in &sourcetypes {
            info!(sourcetype = %sourcetype.name, "Extracting fields");

            match self.source.list_fields(sourcetype).await {
                Ok(fields) => {
                    info!(
                        sourcetype = %sourcetype.name,
                        count = fields.len(),
                        "Extracted fields"
                    );
                    result_set.insert(sourcetype.name.clone(), fields);
                }
                Err(e) if e.is_auth_error() => {
                    error!(
                        sourcetype = %sourcetype.name,
                        status = ?e.status(),
                        error = %e,
                        "Authentication failed while extracting fields; aborting"
                    );
                    return Err(anyhow::Error::new(e).context(format!(
                        "Failed to extract fields for sourcetype '{}'",
                        sourcetype.name
                    )));
                }
                Err(e) => {
                    warn!(
                        sourcetype = %sourcetype.name,
                        status = ?e.status(),
                        error = %e,
                        "Failed to extract fields; skipping sourcetype"
                    );
                    failures.push(SourcetypeFailure {
                        sourcetype: sourcetype.name.clone(),
                        error: e,
                    });
                }
            }
        }

        info!(
            sourcetypes = result_set.len(),
            fields = result_set.field_count(),
            failures = failures.len(),
            "Extraction finished"
        );

        Ok(ExtractionReport {
            indexes,
            result_set,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use tracing_test::traced_test;

    enum FakeFields {
        Ok(Vec<&'static str>),
        Status(u16),
        Transient,
    }

    /// In-memory catalog that records every field request it serves.
    #[derive(Default)]
    struct FakeCatalog {
        indexes: Vec<&'static str>,
        index_status: Option<u16>,
        sourcetypes: Vec<&'static str>,
        sourcetype_status: Option<u16>,
        fields: HashMap<&'static str, FakeFields>,
        field_calls: RefCell<Vec<String>>,
    }

    fn status_error(status: u16) -> ClientError {
        ClientError::from_status(
            status,
            "http://fake/services/search/jobs".to_string(),
            "fake".to_string(),
            None,
        )
    }

    impl CatalogSource for FakeCatalog {
        async fn list_indexes(&self) -> Result<Vec<String>, ClientError> {
            match self.index_status {
                Some(status) => Err(status_error(status)),
                None => Ok(self.indexes.iter().map(|s| s.to_string()).collect()),
            }
        }

        async fn list_sourcetypes(&self) -> Result<Vec<Sourcetype>, ClientError> {
            match self.sourcetype_status {
                Some(status) => Err(status_error(status)),
                None => Ok(self
                    .sourcetypes
                    .iter()
                    .map(|name| Sourcetype::new(*name).with_indexes(self.indexes.clone()))
                    .collect()),
            }
        }

        async fn list_fields(&self, sourcetype: &Sourcetype) -> Result<Vec<String>, ClientError> {
            self.field_calls.borrow_mut().push(sourcetype.name.clone());
            match self.fields.get(sourcetype.name.as_str()) {
                Some(FakeFields::Ok(fields)) => Ok(fields.iter().map(|s| s.to_string()).collect()),
                Some(FakeFields::Status(status)) => Err(status_error(*status)),
                Some(FakeFields::Transient) => {
                    Err(ClientError::TransientNetwork("connection reset".to_string()))
                }
                None => Ok(Vec::new()),
            }
        }
    }

    fn two_sourcetype_catalog(st2: FakeFields) -> FakeCatalog {
        FakeCatalog {
            indexes: vec!["idx1", "idx2"],
            sourcetypes: vec!["st1", "st2"],
            fields: HashMap::from([("st1", FakeFields::Ok(vec!["f1", "f2"])), ("st2", st2)]),
            ..Default::default()
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_not_found_sourcetype_is_recorded_and_skipped() {
        let catalog = two_sourcetype_catalog(FakeFields::Status(404));

        let report = ExtractionPipeline::new(&catalog).run().await.unwrap();

        assert_eq!(report.indexes, vec!["idx1", "idx2"]);
        assert_eq!(report.result_set.len(), 1);
        assert_eq!(
            serde_json::to_value(&report.result_set).unwrap(),
            json!({ "st1": ["f1", "f2"] })
        );

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].sourcetype, "st2");
        assert!(matches!(report.failures[0].error, ClientError::NotFound { .. }));

        assert!(logs_contain("Failed to extract fields; skipping sourcetype"));
        assert!(logs_contain("st2"));
    }

    #[tokio::test]
    async fn test_transient_failure_does_not_stop_later_sourcetypes() {
        let mut catalog = two_sourcetype_catalog(FakeFields::Ok(vec!["g1"]));
        catalog.sourcetypes = vec!["st0", "st1", "st2"];
        catalog.fields.insert("st0", FakeFields::Transient);

        let report = ExtractionPipeline::new(&catalog).run().await.unwrap();

        assert_eq!(
            serde_json::to_string(&report.result_set).unwrap(),
            r#"{"st1":["f1","f2"],"st2":["g1"]}"#
        );
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].error.is_transient());
        assert_eq!(*catalog.field_calls.borrow(), vec!["st0", "st1", "st2"]);
    }

    #[tokio::test]
    async fn test_auth_failure_on_sourcetype_aborts_run() {
        let mut catalog = two_sourcetype_catalog(FakeFields::Ok(vec!["x"]));
        catalog.sourcetypes = vec!["st0", "st1", "st2"];
        catalog.fields.insert("st1", FakeFields::Status(403));

        let err = ExtractionPipeline::new(&catalog).run().await.unwrap_err();

        let client_err = err.downcast_ref::<ClientError>().unwrap();
        assert!(client_err.is_auth_error());
        assert!(err.to_string().contains("st1"));
        // st2 is never requested once the run aborts
        assert_eq!(*catalog.field_calls.borrow(), vec!["st0", "st1"]);
    }

    #[tokio::test]
    async fn test_index_listing_failure_is_fatal() {
        let catalog = FakeCatalog {
            index_status: Some(404),
            sourcetypes: vec!["st1"],
            ..Default::default()
        };

        let err = ExtractionPipeline::new(&catalog).run().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::NotFound { .. })
        ));
        assert!(err.to_string().contains("Failed to list indexes"));
        assert!(catalog.field_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_sourcetype_listing_failure_is_fatal() {
        let catalog = FakeCatalog {
            indexes: vec!["main"],
            sourcetype_status: Some(500),
            ..Default::default()
        };

        let err = ExtractionPipeline::new(&catalog).run().await.unwrap_err();

        assert!(err.to_string().contains("Failed to list sourcetypes"));
        assert!(catalog.field_calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_each_sourcetype_is_requested_once_in_order() {
        let catalog = FakeCatalog {
            indexes: vec!["main"],
            sourcetypes: vec!["zeta", "alpha", "mid"],
            ..Default::default()
        };

        let report = ExtractionPipeline::new(&catalog).run().await.unwrap();

        assert_eq!(*catalog.field_calls.borrow(), vec!["zeta", "alpha", "mid"]);
        // sourcetypes without fields are kept with an empty list
        assert_eq!(
            serde_json::to_string(&report.result_set).unwrap(),
            r#"{"zeta":[],"alpha":[],"mid":[]}"#
        );
        assert_eq!(report.result_set.field_count(), 0);
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn test_no_sourcetypes_yields_empty_result_set() {
        let catalog = FakeCatalog {
            indexes: vec!["main"],
            ..Default::default()
        };

        let report = ExtractionPipeline::new(&catalog).run().await.unwrap();

        assert!(report.result_set.is_empty());
        assert!(catalog.field_calls.borrow().is_empty());
    }

    #[test]
    fn test_result_set_serializes_as_ordered_object() {
        let mut set = ResultSet::default();
        set.insert("zeta".to_string(), vec!["b".to_string(), "a".to_string()]);
        set.insert("alpha".to_string(), vec![]);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"zeta":["b","a"],"alpha":[]}"#);
    }
}
