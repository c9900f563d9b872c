// redactor-core/src/summary.rs
//! Aggregation of detected entities into per-type counts.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entity::PiiEntity;

/// Per-type occurrence counts for a set of detected entities.
///
/// `total` always equals the number of input entities, which in turn equals
/// the sum of the individual counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PiiSummary {
    pub counts: HashMap<String, usize>,
    pub total: usize,
}

/// Counts entities by their verbatim type string, with absent types counted
/// under the `UNKNOWN` sentinel.
///
/// Type strings are *not* case-normalized here; the detection service emits
/// upper-case types, and any mixed-case type a caller injects is counted
/// as-is.
pub fn summarize_entities(entities: &[PiiEntity]) -> PiiSummary {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for entity in entities {
        *counts.entry(entity.type_or_unknown().to_string()).or_insert(0) += 1;
    }
    PiiSummary {
        counts,
        total: entities.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty_set() {
        let summary = summarize_entities(&[]);
        assert!(summary.counts.is_empty());
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_summarize_counts_by_type() {
        let entities = vec![
            PiiEntity::new("NAME", 0.9, 0, 4),
            PiiEntity::new("NAME", 0.8, 10, 14),
            PiiEntity::new("EMAIL", 0.99, 20, 35),
        ];
        let summary = summarize_entities(&entities);
        assert_eq!(summary.counts["NAME"], 2);
        assert_eq!(summary.counts["EMAIL"], 1);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn test_summarize_total_matches_count_sum() {
        let entities = vec![
            PiiEntity::new("SSN", 0.97, 0, 11),
            PiiEntity::new("PHONE", 0.92, 15, 23),
            PiiEntity {
                entity_type: None,
                score: 0.5,
                begin_offset: 30,
                end_offset: 33,
            },
        ];
        let summary = summarize_entities(&entities);
        assert_eq!(summary.total, entities.len());
        assert_eq!(summary.counts.values().sum::<usize>(), summary.total);
        assert_eq!(summary.counts["UNKNOWN"], 1);
    }

    #[test]
    fn test_summarize_is_case_sensitive() {
        // Unlike filtering, counting does not upper-case types.
        let entities = vec![
            PiiEntity::new("Name", 0.9, 0, 4),
            PiiEntity::new("NAME", 0.9, 5, 9),
        ];
        let summary = summarize_entities(&entities);
        assert_eq!(summary.counts["Name"], 1);
        assert_eq!(summary.counts["NAME"], 1);
    }
}
