use dq_model::{FeedbackAction, FieldId, MetadataId, RuleKind, ValidationReport, Verdict};
use dq_validate::{report_payload, write_validation_report_json};

fn sample_report() -> ValidationReport {
    let mut report = ValidationReport::new("orders.csv");
    report.verdicts.push(Verdict {
        rule_id: MetadataId::new(101),
        kind: RuleKind::MinRecordCount,
        passed: false,
        expected: "10".to_string(),
        actual: "5".to_string(),
    });
    report.verdicts.push(Verdict {
        rule_id: MetadataId::new(105),
        kind: RuleKind::CardNumberFormat,
        passed: false,
        expected: "16-digits".to_string(),
        actual: "INVALID CREDIT CARD NUMBER FORMAT".to_string(),
    });
    report.actions.push(FeedbackAction {
        target_field_id: FieldId::new(7),
        note: "ERROR: Data validation failed. INVALID CREDIT CARD NUMBER FORMAT. \
               Expected format 16-digits."
            .to_string(),
    });
    report
}

#[test]
fn report_payload_shape_is_stable() {
    let payload = report_payload(&sample_report(), 5, "2024-01-01T00:00:00+00:00".to_string());

    insta::assert_json_snapshot!(payload, @r#"
    {
      "schema": "dq.validation-report",
      "schema_version": 1,
      "generated_at": "2024-01-01T00:00:00+00:00",
      "dataset": "orders.csv",
      "record_count": 5,
      "passed_count": 0,
      "failed_count": 2,
      "verdicts": [
        {
          "rule_id": 101,
          "kind": "min_record_count",
          "passed": false,
          "expected": "10",
          "actual": "5"
        },
        {
          "rule_id": 105,
          "kind": "card_number_format",
          "passed": false,
          "expected": "16-digits",
          "actual": "INVALID CREDIT CARD NUMBER FORMAT"
        }
      ],
      "actions": [
        {
          "target_field_id": 7,
          "note": "ERROR: Data validation failed. INVALID CREDIT CARD NUMBER FORMAT. Expected format 16-digits."
        }
      ]
    }
    "#);
}

#[test]
fn report_file_is_written_with_trailing_newline() {
    let dir = std::env::temp_dir().join(format!(
        "dq-report-test-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let path = dir.join("reports").join("validation.json");

    let written = write_validation_report_json(&path, &sample_report(), 5).expect("write report");
    assert_eq!(written, path);

    let contents = std::fs::read_to_string(&path).expect("read report back");
    assert!(contents.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&contents).expect("report is valid json");
    assert_eq!(value["schema"], "dq.validation-report");
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["record_count"], 5);
    assert_eq!(value["failed_count"], 2);
    assert_eq!(value["verdicts"].as_array().map(Vec::len), Some(2));
}
