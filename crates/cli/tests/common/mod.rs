//! Shared test utilities for splunk-fields integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading and
//!   keeps output and logs inside a temporary directory.
//! - Mount the Splunk endpoints a full run touches.
//!
//! Invariants / Assumptions:
//! - `SPLUNK_API_TOKEN` is set to "test-token" unless overridden.
//! - Every command runs with its working directory inside a `TempDir`.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";

/// A hermetic `splunk-fields` command plus the scratch directory it runs in.
pub struct TestRun {
    pub dir: TempDir,
    pub cmd: Command,
}

impl TestRun {
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.dir.path().join("logs")
    }
}

/// Returns a hermetic `splunk-fields` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `SPLUNK_API_TOKEN` is set to a dummy value.
/// - Other `SPLUNK_*` variables are cleared so the host cannot leak in.
pub fn splunk_fields_cmd() -> TestRun {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-fields");

    cmd.current_dir(dir.path());
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SPLUNK_API_TOKEN", TEST_TOKEN);
    cmd.env_remove("SPLUNK_URL")
        .env_remove("SPLUNK_TIMEOUT")
        .env_remove("SPLUNK_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    TestRun { dir, cmd }
}

/// Same as [`splunk_fields_cmd`], pointed at `base_url`.
#[allow(dead_code)]
pub fn splunk_fields_cmd_with_url(base_url: &str) -> TestRun {
    let mut run = splunk_fields_cmd();
    run.cmd.env("SPLUNK_URL", base_url);
    run
}

/// Every file below `root`, recursively.
#[allow(dead_code)]
pub fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(files_under(&path));
            } else {
                files.push(path);
            }
        }
    }
    files
}

fn oneshot(rows: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "messages": [], "results": rows }))
}

/// Mount the index listing endpoint.
#[allow(dead_code)]
pub async fn mount_indexes(server: &MockServer, names: &[&str]) {
    let entries: Vec<Value> = names.iter().map(|n| json!({ "name": n, "content": {} })).collect();
    Mock::given(method("GET"))
        .and(path("/services/data/indexes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "entry": entries })))
        .mount(server)
        .await;
}

/// Mount the sourcetype discovery search; each sourcetype is seen in `index`.
#[allow(dead_code)]
pub async fn mount_sourcetypes(server: &MockServer, index: &str, sourcetypes: &[&str]) {
    let rows: Vec<Value> = sourcetypes
        .iter()
        .map(|st| json!({ "index": index, "sourcetype": st }))
        .collect();
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains("tstats"))
        .respond_with(oneshot(Value::Array(rows)))
        .mount(server)
        .await;
}

/// Mount the field search for one sourcetype with a canned response.
#[allow(dead_code)]
pub async fn mount_fields(server: &MockServer, sourcetype: &str, response: ResponseTemplate) {
    // The query is form-encoded: sourcetype="st" becomes sourcetype%3D%22st%22
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .and(body_string_contains(format!(
            "sourcetype%3D%22{}%22",
            sourcetype
        )))
        .respond_with(response)
        .mount(server)
        .await;
}

/// A successful field search returning `fields` (one `fieldsummary` row each).
#[allow(dead_code)]
pub fn fields_response(fields: &[&str]) -> ResponseTemplate {
    let rows: Vec<Value> = fields.iter().map(|f| json!({ "field": f })).collect();
    oneshot(Value::Array(rows))
}
