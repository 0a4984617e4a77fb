//! Result normalizer - the only place outcomes become user-facing text.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::{info, warn};

use super::error::ToolError;

/// Convert a call outcome into the MCP result envelope.
///
/// Success carries the payload as pretty-printed JSON. Errors carry
/// `"Error: <message>"` and set `isError`.
pub fn normalize(outcome: Result<Value, ToolError>) -> CallToolResult {
    match outcome {
        Ok(payload) => match serde_json::to_string_pretty(&payload) {
            Ok(text) => success_result(text),
            Err(e) => error_result(&ToolError::unexpected(e.to_string())),
        },
        Err(err) => error_result(&err),
    }
}

/// Create a success result with text content.
pub fn success_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Create an error result from a tool error.
pub fn error_result(err: &ToolError) -> CallToolResult {
    let message = format!("Error: {}", err);
    if err.is_pre_dispatch() {
        info!("{}", message);
    } else {
        warn!("{}", message);
    }
    CallToolResult::error(vec![Content::text(message)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> String {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_success_is_pretty_json() {
        let payload = json!({"ticker": "AAPL", "prices": [1.5, 2.5]});
        let result = normalize(Ok(payload.clone()));

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), serde_json::to_string_pretty(&payload).unwrap());
        assert!(text_of(&result).contains("\n  \"ticker\": \"AAPL\""));
    }

    #[test]
    fn test_validation_error_envelope() {
        let result = normalize(Err(ToolError::Validation {
            parameter: "id",
            label: "Organization ID",
        }));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: Organization ID is required");
    }

    #[test]
    fn test_request_failed_envelope() {
        let result = normalize(Err(ToolError::RequestFailed {
            status: 503,
            body: "upstream down".to_string(),
        }));
        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("Error: "));
        assert!(text.contains("503"));
        assert!(text.contains("upstream down"));
    }

    #[test]
    fn test_every_error_kind_is_prefixed() {
        let errors = [
            ToolError::unknown_tool("nope"),
            ToolError::transport("connection refused"),
            ToolError::unexpected("bad json"),
        ];
        for err in errors {
            let result = normalize(Err(err.clone()));
            assert_eq!(result.is_error, Some(true));
            assert_eq!(text_of(&result), format!("Error: {}", err));
        }
    }
}
