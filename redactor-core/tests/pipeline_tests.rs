// redactor-core/tests/pipeline_tests.rs
//! Integration tests exercising the public filter → redact / summarize
//! pipeline the way the transport layer drives it.

use test_log::test;

use redactor_core::{
    filter_entities, redact_text, summarize_entities, FilterCriteria, PiiEntity,
};

fn scenario_text() -> &'static str {
    "Hi Jane, call 555-1234"
}

fn scenario_entities() -> Vec<PiiEntity> {
    vec![
        PiiEntity::new("NAME", 0.9, 3, 7),
        PiiEntity::new("PHONE", 0.95, 14, 22),
    ]
}

#[test]
fn filter_then_redact_scenario() {
    let criteria = FilterCriteria::new(None, 0.5);
    let retained = filter_entities(scenario_entities(), &criteria);
    assert_eq!(retained.len(), 2);
    assert_eq!(
        redact_text(scenario_text(), &retained),
        "Hi [NAME], call [PHONE]"
    );
}

#[test]
fn high_threshold_empties_filter_and_redaction_is_a_no_op() {
    let criteria = FilterCriteria::new(None, 0.97);
    let retained = filter_entities(scenario_entities(), &criteria);
    assert!(retained.is_empty());
    assert_eq!(redact_text(scenario_text(), &retained), scenario_text());
}

#[test]
fn filter_is_idempotent_for_any_criteria_combination() {
    let criteria_set = [
        FilterCriteria::default(),
        FilterCriteria::new(Some(vec!["NAME".to_string()]), 0.0),
        FilterCriteria::new(Some(vec!["phone".to_string()]), 0.92),
        FilterCriteria::new(None, 1.0),
    ];
    for criteria in &criteria_set {
        let once = filter_entities(scenario_entities(), criteria);
        let twice = filter_entities(once.clone(), criteria);
        assert_eq!(once, twice);
    }
}

#[test]
fn narrowing_the_allow_list_never_increases_retention() {
    let broad = FilterCriteria::new(Some(vec!["NAME".to_string(), "PHONE".to_string()]), 0.0);
    let narrow = FilterCriteria::new(Some(vec!["NAME".to_string()]), 0.0);
    let broad_count = filter_entities(scenario_entities(), &broad).len();
    let narrow_count = filter_entities(scenario_entities(), &narrow).len();
    assert!(narrow_count <= broad_count);
}

#[test]
fn redaction_is_stable_under_input_permutations() {
    let text = "a@b.com wrote to Jane at 555-1234 from 10.0.0.1";
    let entities = vec![
        PiiEntity::new("EMAIL", 0.99, 0, 7),
        PiiEntity::new("NAME", 0.9, 17, 21),
        PiiEntity::new("PHONE", 0.95, 25, 33),
        PiiEntity::new("IP_ADDRESS", 0.97, 39, 47),
    ];

    let expected = redact_text(text, &entities);
    // A handful of permutations, including fully reversed.
    let permutations: Vec<Vec<usize>> = vec![
        vec![3, 2, 1, 0],
        vec![1, 3, 0, 2],
        vec![2, 0, 3, 1],
    ];
    for order in permutations {
        let permuted: Vec<PiiEntity> = order.iter().map(|&i| entities[i].clone()).collect();
        assert_eq!(redact_text(text, &permuted), expected);
    }
    assert_eq!(expected, "[EMAIL] wrote to [NAME] at [PHONE] from [IP_ADDRESS]");
}

#[test]
fn multibyte_text_filters_and_redacts_by_character_offsets() {
    // Character offsets: "María" spans [5, 10), "612-345-678" spans [18, 29).
    let text = "Hola María, llama 612-345-678";
    let entities = vec![
        PiiEntity::new("NAME", 0.93, 5, 10),
        PiiEntity::new("PHONE", 0.96, 18, 29),
    ];
    let retained = filter_entities(entities, &FilterCriteria::new(None, 0.9));
    assert_eq!(
        redact_text(text, &retained),
        "Hola [NAME], llama [PHONE]"
    );
}

#[test]
fn summarize_counts_whatever_the_filter_retained() {
    let entities = vec![
        PiiEntity::new("NAME", 0.9, 0, 4),
        PiiEntity::new("EMAIL", 0.3, 5, 12),
        PiiEntity::new("NAME", 0.8, 13, 17),
    ];
    let retained = filter_entities(entities, &FilterCriteria::new(None, 0.5));
    let summary = summarize_entities(&retained);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.counts["NAME"], 2);
    assert!(!summary.counts.contains_key("EMAIL"));
    assert_eq!(summary.counts.values().sum::<usize>(), summary.total);
}
