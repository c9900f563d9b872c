//! errors.rs - Custom error types for the redactor-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `redactor-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RedactorError {
    /// The input text exceeds the byte ceiling of the synchronous detection API.
    /// The caller must chunk or shrink the input; there is no retry.
    #[error("Text is {size} bytes, which exceeds the {limit}-byte limit for synchronous PII analysis")]
    TextTooLarge { size: usize, limit: usize },

    /// The requested or detected language is outside the supported set for
    /// PII operations. Carries the rejected code and its human-readable name,
    /// plus the detection confidence when the code was auto-detected.
    #[error("{name} ({code}) is not supported for PII operations; supported languages are English (en) and Spanish (es)")]
    UnsupportedLanguage {
        code: String,
        name: String,
        score: Option<f64>,
    },

    /// Language auto-detection returned no usable signal. The caller should
    /// resupply the request with an explicit language code.
    #[error("Could not determine the dominant language of the text; supply an explicit language_code")]
    DetectionFailed,

    /// Opaque failure from the external detection service. `credential` marks
    /// auth/token failures so callers can classify without parsing the message.
    #[error("Detection service call failed: {message}")]
    OracleFailure { message: String, credential: bool },

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl RedactorError {
    /// Convenience constructor for non-credential oracle failures.
    pub fn oracle(message: impl Into<String>) -> Self {
        RedactorError::OracleFailure {
            message: message.into(),
            credential: false,
        }
    }

    /// Convenience constructor for credential-classified oracle failures.
    pub fn credential(message: impl Into<String>) -> Self {
        RedactorError::OracleFailure {
            message: message.into(),
            credential: true,
        }
    }

    /// Returns `true` when this error is a credential-classified oracle
    /// failure, i.e. one that a fresh client may resolve.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            RedactorError::OracleFailure {
                credential: true,
                ..
            }
        )
    }
}
