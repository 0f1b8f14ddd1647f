use std::collections::BTreeMap;

use dq_catalog::RuleCatalog;
use dq_model::{
    CellValue, ColumnName, Dataset, FieldId, MetadataId, Record, RecordId, RuleIdMap, RuleKind,
    ValidationConfig,
};
use dq_validate::ValidationSession;

fn rule_ids() -> RuleIdMap {
    RuleIdMap {
        min_expected_records: Some(MetadataId::new(101)),
        max_expected_records: Some(MetadataId::new(102)),
        date_format_pattern: Some(MetadataId::new(103)),
        date_format_label: Some(MetadataId::new(104)),
        card_number_pattern: Some(MetadataId::new(105)),
        card_number_digits: Some(MetadataId::new(106)),
    }
}

fn config() -> ValidationConfig {
    ValidationConfig {
        rule_ids: rule_ids(),
        columns: dq_model::ColumnBindings::default(),
        flag_field: FieldId::new(7),
    }
}

fn catalog_for(values: &[(u64, &str)]) -> RuleCatalog {
    let items: Vec<String> = values
        .iter()
        .map(|(id, value)| {
            format!(r#"{{"id":{id},"attributes":{{"extra_metadata_value":"{value}"}}}}"#)
        })
        .collect();
    let raw = format!(r#"{{"extra_metadata_list":[{}]}}"#, items.join(","));
    RuleCatalog::parse(&raw, &rule_ids()).expect("parse payload")
}

/// Standard four-rule catalog: at least 10 records, at most 100, dates as
/// DD-MM-YYYY, card numbers as 16 digits.
fn full_catalog() -> RuleCatalog {
    catalog_for(&[
        (101, "10"),
        (102, "100"),
        (103, r"\\d{2}-\\d{2}-\\d{4}"),
        (104, "DD-MM-YYYY"),
        (105, r"\\d{16}"),
        (106, "16"),
    ])
}

fn make_dataset(rows: &[(&str, &str)]) -> Dataset {
    let date = ColumnName::new("Date").unwrap();
    let card = ColumnName::new("Credit Card Number").unwrap();
    let mut dataset = Dataset::new("orders.csv", vec![date.clone(), card.clone()]);
    for (idx, (date_value, card_value)) in rows.iter().enumerate() {
        let mut cells = BTreeMap::new();
        cells.insert(date.clone(), CellValue::Text((*date_value).to_string()));
        cells.insert(card.clone(), CellValue::Text((*card_value).to_string()));
        dataset.push_record(Record {
            id: RecordId::from_sha256([idx as u8; 32]),
            cells,
        });
    }
    dataset
}

fn clean_dataset(records: usize) -> Dataset {
    let rows: Vec<(&str, &str)> = (0..records)
        .map(|_| ("12-01-2023", "4111111111111111"))
        .collect();
    make_dataset(&rows)
}

#[test]
fn clean_dataset_passes_every_rule() {
    let session = ValidationSession::new(&config());
    let report = session.run(&clean_dataset(50), &full_catalog());

    assert_eq!(report.verdicts.len(), 4);
    assert!(report.verdicts.iter().all(|verdict| verdict.passed));
    assert!(report.actions.is_empty());
    assert!(!report.has_failures());
}

#[test]
fn verdicts_come_back_in_evaluation_order() {
    let session = ValidationSession::new(&config());
    let report = session.run(&clean_dataset(50), &full_catalog());

    let kinds: Vec<RuleKind> = report.verdicts.iter().map(|verdict| verdict.kind).collect();
    assert_eq!(kinds, RuleKind::EVALUATION_ORDER.to_vec());
}

#[test]
fn low_record_count_fails_with_both_numbers() {
    let session = ValidationSession::new(&config());
    let report = session.run(&clean_dataset(5), &full_catalog());

    let min = &report.verdicts[0];
    assert_eq!(min.kind, RuleKind::MinRecordCount);
    assert!(!min.passed);
    assert_eq!(min.expected, "10");
    assert_eq!(min.actual, "5");

    // Count failures never queue feedback.
    assert!(report.actions.is_empty());
}

#[test]
fn failed_card_number_queues_exactly_one_flag() {
    let mut rows = vec![("12-01-2023", "4111111111111111"); 11];
    rows.push(("12-01-2023", "411111111111111"));
    let session = ValidationSession::new(&config());
    let report = session.run(&make_dataset(&rows), &full_catalog());

    let card = report
        .verdicts
        .iter()
        .find(|verdict| verdict.kind == RuleKind::CardNumberFormat)
        .expect("card verdict");
    assert!(!card.passed);
    assert_eq!(card.expected, "16-digits");

    assert_eq!(report.actions.len(), 1);
    let action = &report.actions[0];
    assert_eq!(action.target_field_id, FieldId::new(7));
    assert_eq!(
        action.note,
        "ERROR: Data validation failed. INVALID CREDIT CARD NUMBER FORMAT. \
         Expected format 16-digits."
    );
}

#[test]
fn date_failure_does_not_queue_feedback() {
    let mut rows = vec![("12-01-2023", "4111111111111111"); 11];
    rows.push(("2023/01/12", "4111111111111111"));
    let session = ValidationSession::new(&config());
    let report = session.run(&make_dataset(&rows), &full_catalog());

    assert!(report.has_failures());
    assert!(report.actions.is_empty());
}

#[test]
fn changing_one_date_flips_only_the_date_verdict() {
    let session = ValidationSession::new(&config());
    let clean = session.run(&clean_dataset(20), &full_catalog());

    let mut rows = vec![("12-01-2023", "4111111111111111"); 19];
    rows.push(("2023/01/12", "4111111111111111"));
    let dirty = session.run(&make_dataset(&rows), &full_catalog());

    for (before, after) in clean.verdicts.iter().zip(dirty.verdicts.iter()) {
        if before.kind == RuleKind::DateFormat {
            assert!(before.passed);
            assert!(!after.passed);
        } else {
            assert_eq!(before.passed, after.passed);
        }
    }
}

#[test]
fn repeated_runs_yield_identical_reports() {
    let session = ValidationSession::new(&config());
    let dataset = clean_dataset(5);
    let catalog = full_catalog();

    let first = session.run(&dataset, &catalog);
    let second = session.run(&dataset, &catalog);
    assert_eq!(first, second);
}

#[test]
fn rule_error_is_recorded_and_run_continues() {
    // Min threshold is not numeric; the remaining rules still run.
    let catalog = catalog_for(&[
        (101, "ten"),
        (105, r"\\d{16}"),
        (106, "16"),
    ]);
    let session = ValidationSession::new(&config());
    let report = session.run(&clean_dataset(3), &catalog);

    assert_eq!(report.verdicts.len(), 2);
    let min = &report.verdicts[0];
    assert!(!min.passed);
    assert_eq!(min.expected, "ten");
    assert!(min.actual.contains("threshold"));

    let card = &report.verdicts[1];
    assert_eq!(card.kind, RuleKind::CardNumberFormat);
    assert!(card.passed);
}

#[test]
fn card_rule_error_does_not_queue_feedback() {
    // Dataset has no card column at all, so the rule errors instead of failing.
    let date = ColumnName::new("Date").unwrap();
    let mut dataset = Dataset::new("orders.csv", vec![date.clone()]);
    let mut cells = BTreeMap::new();
    cells.insert(date, CellValue::Text("12-01-2023".to_string()));
    dataset.push_record(Record {
        id: RecordId::from_sha256([1u8; 32]),
        cells,
    });

    let catalog = catalog_for(&[(105, r"\\d{16}"), (106, "16")]);
    let session = ValidationSession::new(&config());
    let report = session.run(&dataset, &catalog);

    assert_eq!(report.verdicts.len(), 1);
    assert!(!report.verdicts[0].passed);
    assert_eq!(report.verdicts[0].expected, "16-digits");
    assert!(report.actions.is_empty());
}

#[test]
fn empty_dataset_fails_only_the_min_rule() {
    let session = ValidationSession::new(&config());
    let report = session.run(&make_dataset(&[]), &full_catalog());

    for verdict in &report.verdicts {
        if verdict.kind == RuleKind::MinRecordCount {
            assert!(!verdict.passed);
            assert_eq!(verdict.actual, "0");
        } else {
            assert!(verdict.passed, "{} should pass vacuously", verdict.kind);
        }
    }
    assert!(report.actions.is_empty());
}

#[test]
fn unconfigured_rules_are_skipped_silently() {
    let catalog = catalog_for(&[(101, "1")]);
    let session = ValidationSession::new(&config());
    let report = session.run(&clean_dataset(3), &catalog);

    assert_eq!(report.verdicts.len(), 1);
    assert_eq!(report.verdicts[0].kind, RuleKind::MinRecordCount);
}
