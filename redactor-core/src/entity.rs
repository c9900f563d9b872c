// redactor-core/src/entity.rs
//! Provides core data structures for detected PII entities and language
//! signals, plus PII-safe debug logging helpers used across the library.

use serde::{Deserialize, Serialize};
use log::debug;

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("REDACTOR_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// The sentinel type used for entities the detection service returned
/// without a type classification.
pub const UNKNOWN_ENTITY_TYPE: &str = "UNKNOWN";

/// A single PII entity span as reported by the detection service.
///
/// Offsets are *character* (code-point) indices into the exact text value the
/// entity was detected against, half-open `[begin_offset, end_offset)`. An
/// entity carries no reference to that text; it is meaningless against any
/// other string. Offsets outside `[0, len]` are an upstream contract
/// violation and are not defensively checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PiiEntity {
    /// Entity classification (e.g. "NAME", "EMAIL", "SSN"); `None` when the
    /// service omitted it.
    #[serde(default)]
    pub entity_type: Option<String>,
    /// Detection confidence in `[0, 1]`.
    pub score: f64,
    /// Inclusive start, in characters.
    pub begin_offset: usize,
    /// Exclusive end, in characters.
    pub end_offset: usize,
}

impl PiiEntity {
    pub fn new(
        entity_type: impl Into<String>,
        score: f64,
        begin_offset: usize,
        end_offset: usize,
    ) -> Self {
        Self {
            entity_type: Some(entity_type.into()),
            score,
            begin_offset,
            end_offset,
        }
    }

    /// The type string used for counting and tagging, with the `UNKNOWN`
    /// sentinel substituted for absent types.
    pub fn type_or_unknown(&self) -> &str {
        self.entity_type.as_deref().unwrap_or(UNKNOWN_ENTITY_TYPE)
    }
}

/// One dominant-language candidate from the detection service. A detection
/// call yields these in descending score order; the first is dominant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSignal {
    pub language_code: String,
    pub score: f64,
}

/// Wire shape of a detected entity as returned by the `detect_pii` tool:
/// the entity plus the source text slice it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub text: String,
    pub score: f64,
    pub begin_offset: usize,
    pub end_offset: usize,
}

/// Wire shape of a detected language as returned by the `detect_language`
/// tool: the code, its human-readable name, and the detection confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language_code: String,
    pub language_name: String,
    pub score: f64,
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_entity_debug(module_path: &str, entity: &PiiEntity, covered_text: &str) {
    debug!(
        "{} Detected entity: Type='{}', Score={:.4}, Span=[{}, {}), Text='{}'",
        module_path,
        entity.type_or_unknown(),
        entity.score,
        entity.begin_offset,
        entity.end_offset,
        get_loggable_content(covered_text)
    );
}

pub fn log_redaction_action_debug(
    module_path: &str,
    original_sensitive_content: &str,
    sanitized_replacement: &str,
) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}'",
        module_path,
        get_loggable_content(original_sensitive_content),
        sanitized_replacement
    );
}
