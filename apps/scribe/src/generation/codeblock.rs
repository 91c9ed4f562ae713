//! Fenced code block extraction from normalized model output.

use crate::errors::GenerationError;

/// Extracts the first triple-backtick fenced block from `text`, trimmed.
///
/// An optional language tag immediately after the opening fence is skipped
/// and ignored. Only the first block is considered; scanning stops at its
/// closing fence. Fails with `NoCodeBlockFound` when no complete block
/// exists.
pub fn extract_code_block(text: &str) -> Result<String, GenerationError> {
    let open = text.find("```").ok_or(GenerationError::NoCodeBlockFound)?;
    let after_fence = &text[open + 3..];

    // Language tag: a run of word characters glued to the opening fence.
    let tag_len: usize = after_fence
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum();
    let body = &after_fence[tag_len..];

    let close = body.find("```").ok_or(GenerationError::NoCodeBlockFound)?;
    Ok(body[..close].trim().to_string())
}
