//! Helpers shared by the soccer tools.

use rmcp::model::{CallToolResult, Content};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::super::ToolError;

/// Deserialize tool arguments into a parameter struct.
///
/// Missing fields and wrong JSON types abort the call.
pub fn parse_params<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Wrap a JSON value (payload or `{error}` object) as a tool result.
///
/// Objects are also exposed as structured content.
pub fn json_result(value: Value) -> CallToolResult {
    let text = Content::text(value.to_string());
    if value.is_object() {
        CallToolResult {
            content: vec![text],
            structured_content: Some(value),
            is_error: Some(false),
            meta: None,
        }
    } else {
        CallToolResult::success(vec![text])
    }
}

/// Serialize a tool result for the HTTP JSON-RPC transport.
#[cfg(feature = "http")]
pub fn to_http_response(result: CallToolResult) -> Result<Value, String> {
    serde_json::to_value(result).map_err(|e| e.to_string())
}

/// Extract the text of the first content item.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}
