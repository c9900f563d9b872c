// redactor-core/src/redactor.rs
//! Span redaction: rewriting a text so each detected entity span is replaced
//! by a bracketed type tag such as `[NAME]` or `[SSN]`.
//!
//! Entities are processed in descending `begin_offset` order. Replacing the
//! rightmost remaining span first means the splice never shifts the character
//! positions of the spans still to be processed, so the input may arrive in
//! any order. Offsets are character indices, and slicing happens on
//! characters, never bytes, so multi-byte text redacts correctly.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::entity::{log_redaction_action_debug, PiiEntity};

/// Replaces every entity's `[begin_offset, end_offset)` character range in
/// `text` with `[TYPE]` (the type upper-cased; `[UNKNOWN]` when absent).
///
/// With an empty entity list the text is returned unchanged. For
/// non-overlapping spans the result is independent of the input order.
/// Overlapping spans are not validated: the later-processed (smaller
/// `begin_offset`) span re-slices text that already contains an inserted tag,
/// and the composite output is unspecified. Span indices beyond the current
/// working length clamp to it, matching the slicing semantics the offsets
/// were produced against.
pub fn redact_text(text: &str, entities: &[PiiEntity]) -> String {
    if entities.is_empty() {
        return text.to_string();
    }

    let mut ordered: Vec<&PiiEntity> = entities.iter().collect();
    ordered.sort_by(|a, b| b.begin_offset.cmp(&a.begin_offset));

    let mut working: Vec<char> = text.chars().collect();
    for entity in ordered {
        let begin = entity.begin_offset.min(working.len());
        let end = entity.end_offset.clamp(begin, working.len());
        let tag = format!("[{}]", entity.type_or_unknown().to_uppercase());

        let original: String = working[begin..end].iter().collect();
        log_redaction_action_debug("[redactor_core::redactor]", &original, &tag);

        working.splice(begin..end, tag.chars());
    }

    debug!(
        "[redactor_core::redactor] Redacted {} spans. Original length: {}, redacted length: {}",
        entities.len(),
        text.chars().count(),
        working.len()
    );
    working.into_iter().collect()
}
