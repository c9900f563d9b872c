// redactor-core/src/oracle.rs
//! Defines the `NlpOracle` trait, the seam between the pure redaction
//! pipeline and the external cloud NLP service.
//!
//! The trait decouples the analyzer and language gate from any particular
//! provider, allowing the production client, retry decorators, and test
//! doubles to be used interchangeably. Implementations own their connection
//! and credential lifecycle; the core never retries or times out a call on
//! their behalf.
//!
//! License: MIT OR APACHE 2.0

use async_trait::async_trait;

use crate::entity::{LanguageSignal, PiiEntity};
use crate::errors::RedactorError;

/// A client for the external NLP detection service.
///
/// Both calls are request-scoped and independent; implementations must be
/// safe to share across concurrent requests.
#[async_trait]
pub trait NlpOracle: Send + Sync {
    /// Returns the dominant-language candidates for `text`, descending by
    /// confidence. An empty vector means the service produced no usable
    /// signal.
    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<LanguageSignal>, RedactorError>;

    /// Returns every PII entity detected in `text`, with character offsets
    /// relative to `text`. `language_code` must already be validated against
    /// the supported set.
    async fn detect_pii_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<PiiEntity>, RedactorError>;

    /// Drops any cached connection or credential state so the next call
    /// starts fresh. Used by retry decorators after a credential failure.
    async fn reset(&self) {}
}
