// File: redactor-core/src/validators.rs
//! Programmatic validation applied to request input before any detection
//! service call is made.
//!
//! Currently this is the text-size guard. The synchronous detection API has a
//! hard ceiling on the UTF-8 encoded byte length of the input, so the check
//! measures bytes, not characters: a text of 100,001 ASCII characters fails,
//! and a much shorter multi-byte text can fail too.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::RedactorError;

/// Maximum input size in UTF-8 encoded bytes accepted by the synchronous
/// detection API.
pub const MAX_TEXT_BYTES: usize = 100_000;

/// Rejects texts whose UTF-8 byte length exceeds [`MAX_TEXT_BYTES`].
///
/// This must run before any detection call. Exceeding the ceiling is always a
/// hard failure surfaced to the caller; nothing downstream retries it.
///
/// # Errors
///
/// Returns [`RedactorError::TextTooLarge`] carrying the measured size and the
/// ceiling.
///
/// TODO: Support chunking large texts by splitting on sentence/paragraph
/// boundaries, processing each chunk, and merging results with adjusted
/// offsets.
pub fn check_text_size(text: &str) -> Result<(), RedactorError> {
    let size = text.len();
    if size > MAX_TEXT_BYTES {
        return Err(RedactorError::TextTooLarge {
            size,
            limit: MAX_TEXT_BYTES,
        });
    }
    Ok(())
}
