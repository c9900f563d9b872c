// redactor-core/src/language.rs
//! Language gating for PII operations.
//!
//! The synchronous PII detection API accepts a small closed set of language
//! codes. A request may name its language explicitly, or leave it out and
//! have the dominant language auto-detected; either way the resolved code
//! must be a member of the supported set before detection runs. Membership
//! is a case-sensitive exact match on the code.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::errors::RedactorError;
use crate::oracle::NlpOracle;

/// Language codes accepted by the PII detection API.
pub const SUPPORTED_PII_LANGUAGES: [&str; 2] = ["en", "es"];

/// Human-readable names for the dominant-language codes the detection
/// service can emit (RFC 5646).
static LANGUAGE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("af", "Afrikaans"),
        ("am", "Amharic"),
        ("ar", "Arabic"),
        ("as", "Assamese"),
        ("az", "Azerbaijani"),
        ("ba", "Bashkir"),
        ("be", "Belarusian"),
        ("bn", "Bengali"),
        ("bs", "Bosnian"),
        ("bg", "Bulgarian"),
        ("ca", "Catalan"),
        ("ceb", "Cebuano"),
        ("cs", "Czech"),
        ("cv", "Chuvash"),
        ("cy", "Welsh"),
        ("da", "Danish"),
        ("de", "German"),
        ("el", "Greek"),
        ("en", "English"),
        ("eo", "Esperanto"),
        ("es", "Spanish"),
        ("et", "Estonian"),
        ("eu", "Basque"),
        ("fa", "Persian"),
        ("fi", "Finnish"),
        ("fr", "French"),
        ("ga", "Irish"),
        ("gl", "Galician"),
        ("gu", "Gujarati"),
        ("ha", "Hausa"),
        ("he", "Hebrew"),
        ("hi", "Hindi"),
        ("hr", "Croatian"),
        ("ht", "Haitian"),
        ("hu", "Hungarian"),
        ("hy", "Armenian"),
        ("id", "Indonesian"),
        ("ilo", "Ilocano"),
        ("is", "Icelandic"),
        ("it", "Italian"),
        ("ja", "Japanese"),
        ("jv", "Javanese"),
        ("ka", "Georgian"),
        ("kk", "Kazakh"),
        ("km", "Khmer"),
        ("kn", "Kannada"),
        ("ko", "Korean"),
        ("ku", "Kurdish"),
        ("ky", "Kyrgyz"),
        ("la", "Latin"),
        ("lb", "Luxembourgish"),
        ("lo", "Lao"),
        ("lt", "Lithuanian"),
        ("lv", "Latvian"),
        ("mg", "Malagasy"),
        ("mk", "Macedonian"),
        ("ml", "Malayalam"),
        ("mn", "Mongolian"),
        ("mr", "Marathi"),
        ("ms", "Malay"),
        ("mt", "Maltese"),
        ("my", "Burmese"),
        ("ne", "Nepali"),
        ("new", "Newari"),
        ("nl", "Dutch"),
        ("no", "Norwegian"),
        ("or", "Oriya"),
        ("pa", "Punjabi"),
        ("pl", "Polish"),
        ("ps", "Pashto"),
        ("pt", "Portuguese"),
        ("qu", "Quechua"),
        ("ro", "Romanian"),
        ("ru", "Russian"),
        ("sa", "Sanskrit"),
        ("sd", "Sindhi"),
        ("si", "Sinhala"),
        ("sk", "Slovak"),
        ("sl", "Slovenian"),
        ("so", "Somali"),
        ("sq", "Albanian"),
        ("sr", "Serbian"),
        ("su", "Sundanese"),
        ("sv", "Swedish"),
        ("sw", "Swahili"),
        ("ta", "Tamil"),
        ("te", "Telugu"),
        ("tg", "Tajik"),
        ("th", "Thai"),
        ("tk", "Turkmen"),
        ("tl", "Tagalog"),
        ("tr", "Turkish"),
        ("tt", "Tatar"),
        ("ug", "Uyghur"),
        ("uk", "Ukrainian"),
        ("ur", "Urdu"),
        ("uz", "Uzbek"),
        ("vi", "Vietnamese"),
        ("yi", "Yiddish"),
        ("yo", "Yoruba"),
        ("zh", "Chinese"),
        ("zh-TW", "Chinese (Traditional)"),
    ])
});

/// Returns whether `code` may be used for PII detection operations.
pub fn is_supported_pii_language(code: &str) -> bool {
    SUPPORTED_PII_LANGUAGES.contains(&code)
}

/// Maps a language code to its human-readable name. Codes outside the known
/// table render as a generic placeholder rather than failing.
pub fn language_name(code: &str) -> String {
    match LANGUAGE_NAMES.get(code) {
        Some(name) => (*name).to_string(),
        None => format!("Unknown ({code})"),
    }
}

/// Resolves the language code a PII operation should run under.
///
/// An explicit code is validated against [`SUPPORTED_PII_LANGUAGES`] without
/// touching the oracle. With no explicit code, one detection call decides:
/// the highest-confidence candidate must be supported.
///
/// # Errors
///
/// * [`RedactorError::UnsupportedLanguage`] when the explicit or dominant
///   detected code is outside the supported set.
/// * [`RedactorError::DetectionFailed`] when auto-detection yields no
///   candidates at all.
pub async fn resolve_language(
    oracle: &dyn NlpOracle,
    text: &str,
    explicit_code: Option<&str>,
) -> Result<String, RedactorError> {
    if let Some(code) = explicit_code {
        if !is_supported_pii_language(code) {
            warn!(
                "[redactor_core::language] Rejecting explicit language code '{}'",
                code
            );
            return Err(RedactorError::UnsupportedLanguage {
                code: code.to_string(),
                name: language_name(code),
                score: None,
            });
        }
        return Ok(code.to_string());
    }

    let signals = oracle.detect_dominant_language(text).await?;
    let Some(dominant) = signals.first() else {
        return Err(RedactorError::DetectionFailed);
    };
    debug!(
        "[redactor_core::language] Dominant language '{}' (score {:.4})",
        dominant.language_code, dominant.score
    );

    if !is_supported_pii_language(&dominant.language_code) {
        return Err(RedactorError::UnsupportedLanguage {
            code: dominant.language_code.clone(),
            name: language_name(&dominant.language_code),
            score: Some(dominant.score),
        });
    }
    Ok(dominant.language_code.clone())
}
