// redactor-core/src/lib.rs
//! # Redactor Core Library
//!
//! `redactor-core` provides the fundamental, transport-independent logic for
//! PII detection post-processing: filtering detected entity spans, rewriting
//! text with redaction tags, aggregating per-type counts, and gating
//! operations on the supported-language set.
//!
//! Entity detection itself is delegated to an external NLP service reached
//! through the [`NlpOracle`] trait; everything downstream of that call is
//! pure and stateless, focusing solely on the transformation of detected
//! spans relative to a single request's text.
//!
//! ## Modules
//!
//! * `entity`: Core data structures for detected entities and language signals.
//! * `filter`: Type/confidence filtering of detected entities.
//! * `redactor`: Span rewriting with bracketed type tags.
//! * `summary`: Per-type aggregation of retained entities.
//! * `language`: Supported-language gating and code-to-name mapping.
//! * `validators`: Input validation run before any detection call.
//! * `oracle`: The `NlpOracle` trait, the seam to the external service.
//! * `analyzer`: The `PiiAnalyzer` orchestrator exposed to transports.
//! * `errors`: Structured error types for programmatic handling.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use redactor_core::{FilterCriteria, NlpOracle, PiiAnalyzer};
//!
//! async fn redact(oracle: Arc<dyn NlpOracle>) -> anyhow::Result<()> {
//!     let analyzer = PiiAnalyzer::new(oracle);
//!     let criteria = FilterCriteria::new(Some(vec!["NAME".into()]), 0.5);
//!     let redacted = analyzer
//!         .redact_pii("Hi Jane, call 555-1234", &criteria, Some("en"))
//!         .await?;
//!     println!("{redacted}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`RedactorError`], whose variants distinguish
//! oversized input, unsupported or undetectable languages, and opaque
//! detection-service failures so callers can render distinct diagnostics
//! without inspecting error text.
//!
//! ## Design Principles
//!
//! * **Oracle seam:** The `NlpOracle` trait keeps the cloud client, retry
//!   decorators, and test doubles interchangeable.
//! * **Stateless:** All pipeline data is request-scoped; the library holds
//!   no mutable state across calls.
//! * **Total pure functions:** Filtering, redaction, and summarization never
//!   fail on well-formed input and never mutate their arguments.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analyzer;
pub mod entity;
pub mod errors;
pub mod filter;
pub mod language;
pub mod oracle;
pub mod redactor;
pub mod summary;
pub mod validators;

/// Re-exports the core entity model.
pub use entity::{
    DetectedEntity, DetectedLanguage, LanguageSignal, PiiEntity, redact_sensitive,
    UNKNOWN_ENTITY_TYPE,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RedactorError;

/// Re-exports entity filtering.
pub use filter::{filter_entities, FilterCriteria};

/// Re-exports span redaction.
pub use redactor::redact_text;

/// Re-exports entity summarization.
pub use summary::{summarize_entities, PiiSummary};

/// Re-exports language gating helpers.
pub use language::{
    is_supported_pii_language, language_name, resolve_language, SUPPORTED_PII_LANGUAGES,
};

/// Re-exports input validation.
pub use validators::{check_text_size, MAX_TEXT_BYTES};

/// Re-exports the oracle seam and the pipeline orchestrator.
pub use oracle::NlpOracle;
pub use analyzer::PiiAnalyzer;
