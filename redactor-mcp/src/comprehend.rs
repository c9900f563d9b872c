// redactor-mcp/src/comprehend.rs
//! AWS Comprehend implementation of the `NlpOracle` seam, plus the
//! credential-refresh retry decorator.
//!
//! The client is built lazily on first use and cached; `reset()` drops the
//! cache so the next call re-resolves credentials (SSO sessions expire out
//! from under long-lived servers). `CredentialRetry` wraps any oracle and
//! retries exactly once after a credential-classified failure.

use std::collections::HashSet;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_comprehend::error::ProvideErrorMetadata;
use aws_sdk_comprehend::error::SdkError;
use aws_sdk_comprehend::types::LanguageCode;
use aws_sdk_comprehend::Client;
use log::{debug, error, info, warn};
use once_cell::sync::Lazy;
use tokio::sync::Mutex;

use redactor_core::{LanguageSignal, NlpOracle, PiiEntity, RedactorError};

/// Error codes the service returns for expired or invalid tokens.
static CREDENTIAL_ERROR_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "ExpiredTokenException",
        "ExpiredToken",
        "InvalidToken",
        "InvalidClientTokenId",
        "UnrecognizedClientException",
    ])
});

/// Resolves the service region from the environment with a fixed fallback.
pub fn region_from_env() -> String {
    std::env::var("AWS_REGION")
        .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        .unwrap_or_else(|_| "us-east-1".to_string())
}

/// Classifies an SDK failure, marking credential problems so the retry
/// decorator and the user-facing renderer can react without string matching
/// at their layer.
fn classify_sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> RedactorError
where
    E: ProvideErrorMetadata,
{
    let code = err.code().map(str::to_string);
    let detail = match err.message() {
        Some(message) => message.to_string(),
        // Dispatch/credential-provider failures carry no service metadata;
        // the SdkError display names the failing stage.
        None => format!("{}", err),
    };

    let credential = code
        .as_deref()
        .map(|c| CREDENTIAL_ERROR_CODES.contains(c))
        .unwrap_or(false)
        || {
            let haystack = format!("{} {}", code.as_deref().unwrap_or(""), detail).to_lowercase();
            haystack.contains("sso")
                || haystack.contains("credential")
                || haystack.contains("token")
        };

    let message = match code {
        Some(code) => format!("{operation}: {code}: {detail}"),
        None => format!("{operation}: {detail}"),
    };
    if credential {
        error!("[redactor_mcp::comprehend] Credential failure during {operation}: {detail}");
        RedactorError::credential(message)
    } else {
        RedactorError::oracle(message)
    }
}

/// AWS Comprehend client behind the `NlpOracle` trait.
pub struct ComprehendOracle {
    region: String,
    client: Mutex<Option<Client>>,
}

impl ComprehendOracle {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            client: Mutex::new(None),
        }
    }

    /// Region resolution order: explicit override, `AWS_REGION`,
    /// `AWS_DEFAULT_REGION`, then `us-east-1`.
    pub fn from_env(region_override: Option<String>) -> Self {
        Self::new(region_override.unwrap_or_else(region_from_env))
    }

    /// Returns the cached client, building it on first use. `Client` is a
    /// cheap handle, so callers get a clone and the lock is held only for
    /// the cache check.
    async fn client(&self) -> Client {
        let mut guard = self.client.lock().await;
        if let Some(client) = guard.as_ref() {
            return client.clone();
        }
        debug!(
            "[redactor_mcp::comprehend] Building Comprehend client (region '{}')",
            self.region
        );
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await;
        let client = Client::new(&config);
        *guard = Some(client.clone());
        client
    }
}

#[async_trait]
impl NlpOracle for ComprehendOracle {
    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<LanguageSignal>, RedactorError> {
        let client = self.client().await;
        let response = client
            .detect_dominant_language()
            .text(text)
            .send()
            .await
            .map_err(|err| classify_sdk_error("DetectDominantLanguage", err))?;

        Ok(response
            .languages()
            .iter()
            .map(|lang| LanguageSignal {
                language_code: lang.language_code().unwrap_or_default().to_string(),
                score: f64::from(lang.score().unwrap_or(0.0)),
            })
            .collect())
    }

    async fn detect_pii_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<PiiEntity>, RedactorError> {
        let client = self.client().await;
        let response = client
            .detect_pii_entities()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|err| classify_sdk_error("DetectPiiEntities", err))?;

        Ok(response
            .entities()
            .iter()
            .map(|entity| PiiEntity {
                entity_type: entity.r#type().map(|t| t.as_str().to_string()),
                score: f64::from(entity.score().unwrap_or(0.0)),
                begin_offset: entity.begin_offset().unwrap_or(0).max(0) as usize,
                end_offset: entity.end_offset().unwrap_or(0).max(0) as usize,
            })
            .collect())
    }

    async fn reset(&self) {
        *self.client.lock().await = None;
        info!("[redactor_mcp::comprehend] Comprehend client reset due to credential error");
    }
}

/// Decorator that retries a credential-classified failure exactly once after
/// resetting the wrapped oracle's client state. Non-credential failures and
/// second failures propagate untouched.
pub struct CredentialRetry<O> {
    inner: O,
}

impl<O> CredentialRetry<O> {
    pub fn new(inner: O) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<O: NlpOracle> NlpOracle for CredentialRetry<O> {
    async fn detect_dominant_language(
        &self,
        text: &str,
    ) -> Result<Vec<LanguageSignal>, RedactorError> {
        match self.inner.detect_dominant_language(text).await {
            Err(err) if err.is_credential_failure() => {
                warn!(
                    "[redactor_mcp::comprehend] Credential error detected: {err}. Resetting client and retrying..."
                );
                self.inner.reset().await;
                let result = self.inner.detect_dominant_language(text).await;
                if result.is_ok() {
                    info!("[redactor_mcp::comprehend] Retry succeeded with fresh credentials");
                }
                result
            }
            other => other,
        }
    }

    async fn detect_pii_entities(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<PiiEntity>, RedactorError> {
        match self.inner.detect_pii_entities(text, language_code).await {
            Err(err) if err.is_credential_failure() => {
                warn!(
                    "[redactor_mcp::comprehend] Credential error detected: {err}. Resetting client and retrying..."
                );
                self.inner.reset().await;
                let result = self.inner.detect_pii_entities(text, language_code).await;
                if result.is_ok() {
                    info!("[redactor_mcp::comprehend] Retry succeeded with fresh credentials");
                }
                result
            }
            other => other,
        }
    }

    async fn reset(&self) {
        self.inner.reset().await;
    }
}
