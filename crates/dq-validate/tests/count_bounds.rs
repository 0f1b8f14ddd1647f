use std::collections::BTreeMap;

use proptest::prelude::*;

use dq_model::{ColumnBindings, ColumnName, Dataset, MetadataId, Record, RecordId, RuleEntry, RuleKind};
use dq_validate::RuleEvaluator;

fn dataset_of(records: usize) -> Dataset {
    let column = ColumnName::new("Date").unwrap();
    let mut dataset = Dataset::new("generated.csv", vec![column]);
    for idx in 0..records {
        let mut digest = [0u8; 32];
        digest[..8].copy_from_slice(&(idx as u64).to_be_bytes());
        dataset.push_record(Record {
            id: RecordId::from_sha256(digest),
            cells: BTreeMap::new(),
        });
    }
    dataset
}

fn count_rule(kind: RuleKind, threshold: u64) -> RuleEntry {
    RuleEntry {
        id: MetadataId::new(1),
        kind,
        value: threshold.to_string(),
        pattern: None,
    }
}

proptest! {
    #[test]
    fn count_rules_agree_with_direct_comparison(records in 0usize..200, threshold in 0u64..200) {
        let dataset = dataset_of(records);
        let evaluator = RuleEvaluator::new(ColumnBindings::default());

        let min = evaluator
            .evaluate(&dataset, &count_rule(RuleKind::MinRecordCount, threshold))
            .unwrap();
        prop_assert_eq!(min.passed, records as u64 >= threshold);
        prop_assert_eq!(min.expected, threshold.to_string());
        prop_assert_eq!(min.actual, records.to_string());

        let max = evaluator
            .evaluate(&dataset, &count_rule(RuleKind::MaxRecordCount, threshold))
            .unwrap();
        prop_assert_eq!(max.passed, records as u64 <= threshold);
    }
}
