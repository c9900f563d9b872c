// redactor-core/src/filter.rs
//! Post-detection filtering of PII entities by type and confidence.
//!
//! The detection service returns every entity it found; a request may narrow
//! that down to specific entity types and/or a minimum confidence score. Both
//! axes apply conjunctively. Absent or empty criteria are no-ops that let
//! everything through on that axis.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use log::debug;

use crate::entity::PiiEntity;

/// Request-scoped filter criteria for detected entities.
///
/// The type allow-list is upper-cased at construction so the per-entity
/// comparison is case-insensitive without repeated normalization.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    allowed_types: Option<HashSet<String>>,
    min_score: f64,
}

impl FilterCriteria {
    /// Builds criteria from the raw request parameters. A `None` or empty
    /// type list means all types are permitted; `min_score` defaults to 0.0
    /// upstream, which retains all scores.
    pub fn new(pii_types: Option<Vec<String>>, min_score: f64) -> Self {
        let allowed_types = pii_types
            .filter(|types| !types.is_empty())
            .map(|types| types.iter().map(|t| t.to_uppercase()).collect());
        Self {
            allowed_types,
            min_score,
        }
    }

    fn permits_type(&self, entity: &PiiEntity) -> bool {
        match &self.allowed_types {
            None => true,
            // An entity with no type cannot match an explicit allow-list.
            Some(allowed) => entity
                .entity_type
                .as_ref()
                .map(|t| allowed.contains(&t.to_uppercase()))
                .unwrap_or(false),
        }
    }

    fn permits_score(&self, entity: &PiiEntity) -> bool {
        entity.score >= self.min_score
    }
}

/// Retains the entities satisfying both filter axes, preserving the relative
/// order of the input sequence. Total over well-formed input; never fails.
pub fn filter_entities(entities: Vec<PiiEntity>, criteria: &FilterCriteria) -> Vec<PiiEntity> {
    let before = entities.len();
    let retained: Vec<PiiEntity> = entities
        .into_iter()
        .filter(|e| criteria.permits_type(e) && criteria.permits_score(e))
        .collect();
    debug!(
        "[redactor_core::filter] Retained {} of {} entities (min_score={})",
        retained.len(),
        before,
        criteria.min_score
    );
    retained
}
