//! Check pipeline with explicit stages.
//!
//! A check run follows these stages in order:
//! 1. **Config**: Load the validation config (rule id map, column bindings, flag field)
//! 2. **Ingest**: Read the delimited data file into a dataset
//! 3. **Resolve**: Obtain the metadata payload and resolve the rule catalog
//! 4. **Validate**: Evaluate the rules and collect verdicts
//! 5. **Feedback**: Deliver field flags for failed card number checks (optional)
//! 6. **Report**: Write the JSON report (optional)
//!
//! This module holds the stages worth calling from tests; orchestration of a
//! full run lives in the binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use dq_api::{ApiCredentials, ApiEndpoints, GovernanceClient};
use dq_catalog::RuleCatalog;
use dq_ingest::{CsvIngestOptions, ingest_csv_file};
use dq_model::{Dataset, RuleIdMap, ValidationConfig};

// ============================================================================
// Stage 1: Config
// ============================================================================

/// Load the validation config from a JSON file.
pub fn load_config(path: &Path) -> Result<ValidationConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parse config file {}", path.display()))?;
    Ok(config)
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

/// Read the data file into a dataset under the given source id.
pub fn ingest_data(path: &Path, source_id: &str) -> Result<Dataset> {
    let options = CsvIngestOptions::new(source_id);
    ingest_csv_file(path, &options)
}

// ============================================================================
// Stage 3: Resolve
// ============================================================================

/// Where the raw extra-metadata payload comes from.
#[derive(Debug)]
pub struct PayloadSource<'a> {
    /// Local payload file; takes precedence over the API when set.
    pub metadata_file: Option<&'a Path>,
    /// Base URL of the governance API.
    pub api_url: Option<&'a str>,
    /// Environment variable holding the API key.
    pub api_key_env: &'a str,
}

/// Fetch the raw metadata payload from the configured source.
pub fn fetch_payload(source: &PayloadSource<'_>) -> Result<String> {
    if let Some(path) = source.metadata_file {
        debug!(path = %path.display(), "reading metadata payload from file");
        return fs::read_to_string(path)
            .with_context(|| format!("read metadata file {}", path.display()));
    }
    let Some(api_url) = source.api_url else {
        bail!("no metadata source; pass --metadata <PATH> or --api-url <URL>");
    };
    let client = connect(api_url, source.api_key_env)?;
    let payload = client
        .fetch_extra_metadata()
        .context("fetch extra metadata")?;
    Ok(payload)
}

/// Parse the payload and resolve the configured rules into a catalog.
pub fn resolve_catalog(raw: &str, ids: &RuleIdMap) -> Result<RuleCatalog> {
    let catalog = RuleCatalog::parse(raw, ids).context("resolve rule catalog")?;
    Ok(catalog)
}

/// Build an authenticated governance API client, reading the key from the
/// named environment variable.
pub fn connect(api_url: &str, api_key_env: &str) -> Result<GovernanceClient> {
    let api_key = std::env::var(api_key_env)
        .with_context(|| format!("read API key from {api_key_env}"))?;
    let client = GovernanceClient::new(ApiEndpoints::new(api_url), &ApiCredentials::new(api_key))?;
    Ok(client)
}
