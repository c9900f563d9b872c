// redactor-mcp/tests/server_dispatch_tests.rs
//! Integration tests driving the MCP server dispatch over an in-memory
//! transport with a canned oracle, so no AWS calls are made.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use redactor_core::{LanguageSignal, NlpOracle, PiiAnalyzer, PiiEntity, RedactorError};
use redactor_mcp::protocol::JsonRpcRequest;
use redactor_mcp::server::McpServer;

/// Canned oracle: English text with one NAME and one PHONE entity.
struct CannedOracle;

#[async_trait]
impl NlpOracle for CannedOracle {
    async fn detect_dominant_language(
        &self,
        _text: &str,
    ) -> Result<Vec<LanguageSignal>, RedactorError> {
        Ok(vec![LanguageSignal {
            language_code: "en".to_string(),
            score: 0.99,
        }])
    }

    async fn detect_pii_entities(
        &self,
        _text: &str,
        _language_code: &str,
    ) -> Result<Vec<PiiEntity>, RedactorError> {
        Ok(vec![
            PiiEntity::new("NAME", 0.9, 3, 7),
            PiiEntity::new("PHONE", 0.95, 14, 22),
        ])
    }
}

fn server() -> McpServer {
    McpServer::new(PiiAnalyzer::new(Arc::new(CannedOracle)))
}

fn request(id: u64, method: &str, params: Value) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    }))
    .unwrap()
}

#[tokio::test]
async fn initialize_reports_server_info_and_capabilities() {
    let response = server()
        .handle_request(request(1, "initialize", json!({})))
        .await
        .unwrap();
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["result"]["serverInfo"]["name"], "redactor-mcp");
    assert!(result["result"]["capabilities"]["tools"].is_object());
    assert!(result["result"]["capabilities"]["prompts"].is_object());
}

#[tokio::test]
async fn notifications_get_no_response() {
    let notification: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "method": "notifications/initialized",
    }))
    .unwrap();
    assert!(server().handle_request(notification).await.is_none());
}

#[tokio::test]
async fn tools_list_names_all_four_tools() {
    let response = server()
        .handle_request(request(2, "tools/list", json!({})))
        .await
        .unwrap();
    let result = serde_json::to_value(&response).unwrap();
    let names: Vec<&str> = result["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["detect_pii", "redact_pii", "summarize_pii", "detect_language"]
    );
}

#[tokio::test]
async fn redact_pii_tool_call_round_trip() {
    let response = server()
        .handle_request(request(
            3,
            "tools/call",
            json!({
                "name": "redact_pii",
                "arguments": {
                    "text": "Hi Jane, call 555-1234",
                    "confidence_threshold": 0.5
                }
            }),
        ))
        .await
        .unwrap();
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["result"]["isError"], false);
    assert_eq!(
        result["result"]["content"][0]["text"],
        "Hi [NAME], call [PHONE]"
    );
}

#[tokio::test]
async fn detect_pii_tool_call_returns_entities_json() {
    let response = server()
        .handle_request(request(
            4,
            "tools/call",
            json!({
                "name": "detect_pii",
                "arguments": {"text": "Hi Jane, call 555-1234"}
            }),
        ))
        .await
        .unwrap();
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["result"]["isError"], false);
    let rendered = result["result"]["content"][0]["text"].as_str().unwrap();
    let entities: Value = serde_json::from_str(rendered).unwrap();
    assert_eq!(entities[0]["type"], "NAME");
    assert_eq!(entities[0]["text"], "Jane");
    assert_eq!(entities[1]["begin_offset"], 14);
}

#[tokio::test]
async fn summarize_pii_tool_call_returns_counts() {
    let response = server()
        .handle_request(request(
            5,
            "tools/call",
            json!({
                "name": "summarize_pii",
                "arguments": {"text": "Hi Jane, call 555-1234"}
            }),
        ))
        .await
        .unwrap();
    let result = serde_json::to_value(&response).unwrap();
    let rendered = result["result"]["content"][0]["text"].as_str().unwrap();
    let summary: Value = serde_json::from_str(rendered).unwrap();
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["counts"]["NAME"], 1);
    assert_eq!(summary["counts"]["PHONE"], 1);
}

#[tokio::test]
async fn unsupported_explicit_language_renders_tool_error() {
    let response = server()
        .handle_request(request(
            6,
            "tools/call",
            json!({
                "name": "redact_pii",
                "arguments": {"text": "Bonjour Jean", "language_code": "fr"}
            }),
        ))
        .await
        .unwrap();
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["result"]["isError"], true);
    let message = result["result"]["content"][0]["text"].as_str().unwrap();
    assert!(message.contains("French (fr)"));
}

#[tokio::test]
async fn oversized_text_renders_tool_error() {
    let text = "a".repeat(150_000);
    let response = server()
        .handle_request(request(
            7,
            "tools/call",
            json!({"name": "redact_pii", "arguments": {"text": text}}),
        ))
        .await
        .unwrap();
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["result"]["isError"], true);
    let message = result["result"]["content"][0]["text"].as_str().unwrap();
    assert!(message.contains("150000 bytes"));
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let response = server()
        .handle_request(request(8, "resources/list", json!({})))
        .await
        .unwrap();
    let result = serde_json::to_value(&response).unwrap();
    assert_eq!(result["error"]["code"], -32601);
}

#[tokio::test]
async fn prompts_round_trip() {
    let list = server()
        .handle_request(request(9, "prompts/list", json!({})))
        .await
        .unwrap();
    let list = serde_json::to_value(&list).unwrap();
    assert_eq!(
        list["result"]["prompts"][0]["name"],
        "pii_redaction_guide"
    );

    let get = server()
        .handle_request(request(
            10,
            "prompts/get",
            json!({"name": "pii_redaction_guide"}),
        ))
        .await
        .unwrap();
    let get = serde_json::to_value(&get).unwrap();
    let text = get["result"]["messages"][0]["content"]["text"]
        .as_str()
        .unwrap();
    assert!(text.contains("PII Redaction Guide"));
}

#[tokio::test]
async fn stdio_loop_answers_line_delimited_requests() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
        "not json at all\n",
    );
    let mut output: Vec<u8> = Vec::new();
    server()
        .run(input.as_bytes(), &mut output)
        .await
        .unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    // initialize + tools/list + parse error; the notification is silent.
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[1]["id"], 2);
    assert_eq!(lines[2]["error"]["code"], -32700);
}
