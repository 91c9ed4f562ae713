//! Response normalization — turns an arbitrary provider response into plain
//! text.
//!
//! Providers disagree on envelope shape: a bare string, `{text}`,
//! OpenAI-style `{choices: [{message: {content}}]}`, Anthropic-ish
//! `{message}` / `{content}`, or `{code}`. The ladder below is evaluated in
//! exactly this order; shapes are not mutually exclusive (a response can
//! carry both `choices` and `content`) and earlier rules win.

use serde_json::Value;
use tracing::debug;

use crate::errors::GenerationError;

/// Extracts the textual payload from a model response.
///
/// Rules, first match wins:
/// 1. null → `EmptyResponse`
/// 2. bare string → returned unchanged, not trimmed
/// 3. `{"text": "..."}` → returned unchanged, not trimmed
/// 4. `{"choices": [...]}` → first choice's `message.content` trimmed,
///    else its `content` trimmed, else `""`; empty array → `""`
/// 5. `{"message": "..."}` trimmed, or `{"message": {"content": "..."}}`
///    trimmed
/// 6. `{"content": "..."}` trimmed
/// 7. `{"code": "..."}` trimmed
/// 8. anything else → `UnrecognizedResponseFormat` with the serialized
///    response
pub fn parse_response(response: &Value) -> Result<String, GenerationError> {
    if response.is_null() {
        return Err(GenerationError::EmptyResponse);
    }

    if let Value::String(s) = response {
        return Ok(s.clone());
    }

    if let Some(text) = response.get("text").and_then(Value::as_str) {
        return Ok(text.to_string());
    }

    if let Some(choices) = response.get("choices").and_then(Value::as_array) {
        let Some(first) = choices.first() else {
            debug!("Response had an empty choices array");
            return Ok(String::new());
        };
        if let Some(content) = first
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
        {
            return Ok(content.trim().to_string());
        }
        if let Some(content) = first.get("content").and_then(Value::as_str) {
            return Ok(content.trim().to_string());
        }
        debug!("First choice matched neither message.content nor content");
        return Ok(String::new());
    }

    if let Some(message) = response.get("message") {
        if let Some(s) = message.as_str() {
            return Ok(s.trim().to_string());
        }
        if let Some(content) = message.get("content").and_then(Value::as_str) {
            return Ok(content.trim().to_string());
        }
        // A message of an unexpected shape falls through to the later rules.
    }

    if let Some(content) = response.get("content").and_then(Value::as_str) {
        return Ok(content.trim().to_string());
    }

    if let Some(code) = response.get("code").and_then(Value::as_str) {
        return Ok(code.trim().to_string());
    }

    Err(GenerationError::UnrecognizedResponseFormat {
        response: response.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_response_is_empty_response_error() {
        let err = parse_response(&Value::Null).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[test]
    fn test_bare_string_returned_untrimmed() {
        let response = json!("  hello  ");
        assert_eq!(parse_response(&response).unwrap(), "  hello  ");
    }

    #[test]
    fn test_text_field_returned_untrimmed() {
        let response = json!({"text": "  raw text  "});
        assert_eq!(parse_response(&response).unwrap(), "  raw text  ");
    }

    #[test]
    fn test_choices_with_nested_message_content() {
        let response = json!({
            "choices": [{"message": {"content": "  Hello world  "}}]
        });
        assert_eq!(parse_response(&response).unwrap(), "Hello world");
    }

    #[test]
    fn test_choices_with_direct_content() {
        let response = json!({"choices": [{"content": " direct "}]});
        assert_eq!(parse_response(&response).unwrap(), "direct");
    }

    #[test]
    fn test_choices_with_unknown_first_element_is_empty_string() {
        let response = json!({"choices": [{"finish_reason": "stop"}]});
        assert_eq!(parse_response(&response).unwrap(), "");
    }

    #[test]
    fn test_empty_choices_array_is_empty_string() {
        let response = json!({"choices": []});
        assert_eq!(parse_response(&response).unwrap(), "");
    }

    #[test]
    fn test_choices_takes_precedence_over_content() {
        let response = json!({
            "content": "loser",
            "choices": [{"message": {"content": "winner"}}]
        });
        assert_eq!(parse_response(&response).unwrap(), "winner");
    }

    #[test]
    fn test_message_as_string_is_trimmed() {
        let response = json!({"message": "  hi  "});
        assert_eq!(parse_response(&response).unwrap(), "hi");
    }

    #[test]
    fn test_message_with_content_is_trimmed() {
        let response = json!({"message": {"content": "  nested  "}});
        assert_eq!(parse_response(&response).unwrap(), "nested");
    }

    #[test]
    fn test_message_of_unexpected_shape_falls_through_to_content() {
        let response = json!({"message": {"role": "assistant"}, "content": " fallback "});
        assert_eq!(parse_response(&response).unwrap(), "fallback");
    }

    #[test]
    fn test_content_field_is_trimmed() {
        let response = json!({"content": "  body  "});
        assert_eq!(parse_response(&response).unwrap(), "body");
    }

    #[test]
    fn test_code_field_is_trimmed() {
        let response = json!({"code": "  let x = 1;  "});
        assert_eq!(parse_response(&response).unwrap(), "let x = 1;");
    }

    #[test]
    fn test_unknown_shape_carries_serialized_response() {
        let response = json!({"unexpected": true});
        match parse_response(&response).unwrap_err() {
            GenerationError::UnrecognizedResponseFormat { response } => {
                assert!(response.contains("unexpected"));
            }
            other => panic!("expected UnrecognizedResponseFormat, got {other:?}"),
        }
    }
}
