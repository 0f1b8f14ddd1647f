use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::{info, info_span, trace};

use dq_api::{DeliveryOutcome, deliver_all};
use dq_cli::logging::redact_value;
use dq_cli::pipeline::{
    PayloadSource, connect, fetch_payload, ingest_data, load_config, resolve_catalog,
};
use dq_model::RuleKind;
use dq_validate::{ValidationSession, write_validation_report_json};

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;
use crate::types::CheckResult;

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let dataset_name = derive_dataset_name(&args.data);
    let check_span = info_span!("check", dataset = %dataset_name);
    let _check_guard = check_span.enter();
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Config
    // =========================================================================
    let config = load_config(&args.config)?;

    // =========================================================================
    // Stage 2: Ingest
    // =========================================================================
    let dataset = ingest_data(&args.data, &dataset_name)?;
    let record_count = dataset.record_count();
    info!(dataset = %dataset_name, record_count, "ingest complete");

    // Row-level trace stays redacted unless --log-data was passed
    if tracing::enabled!(tracing::Level::TRACE) {
        for record in &dataset.records {
            trace!(
                record = %record.id,
                date = redact_value(record.cell(&config.columns.date).as_str()),
                card_number = redact_value(record.cell(&config.columns.card_number).as_str()),
                "ingested record"
            );
        }
    }

    // =========================================================================
    // Stage 3: Resolve
    // =========================================================================
    let payload = fetch_payload(&PayloadSource {
        metadata_file: args.metadata.as_deref(),
        api_url: args.api_url.as_deref(),
        api_key_env: &args.api_key_env,
    })?;
    let catalog = resolve_catalog(&payload, &config.rule_ids)?;
    info!(rule_count = catalog.len(), "rule catalog resolved");

    // =========================================================================
    // Stage 4: Validate
    // =========================================================================
    let session = ValidationSession::new(&config);
    let report = session.run(&dataset, &catalog);

    // =========================================================================
    // Stage 5: Feedback
    // =========================================================================
    let mut deliveries = Vec::new();
    if args.send_feedback && !report.actions.is_empty() {
        let Some(api_url) = args.api_url.as_deref() else {
            bail!("feedback delivery requires --api-url");
        };
        let client = connect(api_url, &args.api_key_env)?;
        deliveries = deliver_all(&client, &report.actions);
    }

    // =========================================================================
    // Stage 6: Report
    // =========================================================================
    let report_path = match &args.report_json {
        Some(path) => Some(write_validation_report_json(path, &report, record_count)?),
        None => None,
    };

    // Failed deliveries count toward the exit code even though verdicts stand
    let delivery_failed = deliveries
        .iter()
        .any(|outcome| matches!(outcome, DeliveryOutcome::Failed { .. }));
    let has_failures = report.has_failures() || delivery_failed;
    info!(
        dataset = %dataset_name,
        passed = report.passed_count(),
        failed = report.failed_count(),
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );

    Ok(CheckResult {
        dataset: dataset_name,
        record_count,
        report,
        deliveries,
        report_path,
        has_failures,
    })
}

pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Value id key", "Descriptor id key", "Checks"]);
    apply_table_style(&mut table);
    for kind in RuleKind::EVALUATION_ORDER {
        table.add_row(vec![
            kind.label(),
            value_key(kind),
            descriptor_key(kind),
            rule_description(kind),
        ]);
    }
    println!("{table}");
}

fn derive_dataset_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("dataset")
        .to_string()
}

/// Config key under `rule_ids` holding the rule's operative item id.
fn value_key(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::MinRecordCount => "min_expected_records",
        RuleKind::MaxRecordCount => "max_expected_records",
        RuleKind::DateFormat => "date_format_pattern",
        RuleKind::CardNumberFormat => "card_number_pattern",
    }
}

/// Config key under `rule_ids` holding the descriptor item id, if any.
fn descriptor_key(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::DateFormat => "date_format_label",
        RuleKind::CardNumberFormat => "card_number_digits",
        RuleKind::MinRecordCount | RuleKind::MaxRecordCount => "-",
    }
}

fn rule_description(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::MinRecordCount => "record count is at least the configured threshold",
        RuleKind::MaxRecordCount => "record count is at most the configured threshold",
        RuleKind::DateFormat => "every date cell matches the configured pattern",
        RuleKind::CardNumberFormat => "every card number cell matches the configured pattern",
    }
}
