// redactor-core/src/analyzer.rs
//! The `PiiAnalyzer` orchestrator: wires the size guard, language gate,
//! detection oracle, entity filter, and the span redactor / summarizer into
//! the four operations exposed to the transport layer.
//!
//! The analyzer is stateless apart from its owned oracle handle and is safe
//! to share across concurrent requests. Each operation validates input size
//! before anything else runs, then resolves the operation language, then
//! performs exactly one detection call.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use log::{debug, info};

use crate::entity::{log_entity_debug, DetectedEntity, DetectedLanguage, PiiEntity};
use crate::errors::RedactorError;
use crate::filter::{filter_entities, FilterCriteria};
use crate::language::{language_name, resolve_language};
use crate::oracle::NlpOracle;
use crate::redactor::redact_text;
use crate::summary::{summarize_entities, PiiSummary};
use crate::validators::check_text_size;

/// Extracts `text[begin..end)` by character position, clamped to the text
/// like the offsets' producer does.
fn char_slice(text: &str, begin: usize, end: usize) -> String {
    text.chars()
        .skip(begin)
        .take(end.saturating_sub(begin))
        .collect()
}

/// Request-independent façade over the PII pipeline.
pub struct PiiAnalyzer {
    oracle: Arc<dyn NlpOracle>,
}

impl PiiAnalyzer {
    pub fn new(oracle: Arc<dyn NlpOracle>) -> Self {
        Self { oracle }
    }

    /// Detects the dominant languages of `text`, mapped to human-readable
    /// names. Not gated: any language the service recognizes is reported.
    pub async fn detect_language(
        &self,
        text: &str,
    ) -> Result<Vec<DetectedLanguage>, RedactorError> {
        check_text_size(text)?;
        let signals = self.oracle.detect_dominant_language(text).await?;
        debug!(
            "[redactor_core::analyzer] Language detection returned {} candidates",
            signals.len()
        );
        Ok(signals
            .into_iter()
            .map(|signal| DetectedLanguage {
                language_name: language_name(&signal.language_code),
                language_code: signal.language_code,
                score: signal.score,
            })
            .collect())
    }

    /// Detects PII entities in `text` and returns the retained subset with
    /// the covered source slices attached.
    pub async fn detect_pii(
        &self,
        text: &str,
        criteria: &FilterCriteria,
        language_code: Option<&str>,
    ) -> Result<Vec<DetectedEntity>, RedactorError> {
        let entities = self.detect_filtered(text, criteria, language_code).await?;
        Ok(entities
            .into_iter()
            .map(|entity| {
                let covered = char_slice(text, entity.begin_offset, entity.end_offset);
                log_entity_debug("[redactor_core::analyzer]", &entity, &covered);
                DetectedEntity {
                    entity_type: entity.type_or_unknown().to_string(),
                    text: covered,
                    score: entity.score,
                    begin_offset: entity.begin_offset,
                    end_offset: entity.end_offset,
                }
            })
            .collect())
    }

    /// Returns `text` with every retained entity span replaced by its type
    /// tag.
    pub async fn redact_pii(
        &self,
        text: &str,
        criteria: &FilterCriteria,
        language_code: Option<&str>,
    ) -> Result<String, RedactorError> {
        let entities = self.detect_filtered(text, criteria, language_code).await?;
        Ok(redact_text(text, &entities))
    }

    /// Returns per-type counts for the retained entities.
    pub async fn summarize_pii(
        &self,
        text: &str,
        criteria: &FilterCriteria,
        language_code: Option<&str>,
    ) -> Result<PiiSummary, RedactorError> {
        let entities = self.detect_filtered(text, criteria, language_code).await?;
        Ok(summarize_entities(&entities))
    }

    /// Shared front half of the three PII operations: size guard, language
    /// gate, one detection call, then filtering.
    async fn detect_filtered(
        &self,
        text: &str,
        criteria: &FilterCriteria,
        language_code: Option<&str>,
    ) -> Result<Vec<PiiEntity>, RedactorError> {
        check_text_size(text)?;
        let language = resolve_language(self.oracle.as_ref(), text, language_code).await?;
        info!(
            "[redactor_core::analyzer] Running PII detection (language '{}')",
            language
        );
        let entities = self.oracle.detect_pii_entities(text, &language).await?;
        Ok(filter_entities(entities, criteria))
    }
}
