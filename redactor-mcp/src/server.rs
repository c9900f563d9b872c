// redactor-mcp/src/server.rs
//! The MCP server loop: newline-delimited JSON-RPC 2.0 over stdio.
//!
//! Requests are handled sequentially in arrival order; each tool call is
//! independent and holds no state beyond its own request. Logging goes to
//! stderr so stdout stays a clean protocol channel.

use anyhow::Result;
use log::{debug, info, warn};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use redactor_core::PiiAnalyzer;

use crate::protocol::{error_code, JsonRpcRequest, JsonRpcResponse};
use crate::tools;

const SERVER_NAME: &str = "redactor-mcp";
const PROTOCOL_VERSION: &str = "2024-11-05";

/// The PII redaction guide served as the `pii_redaction_guide` prompt.
const PII_REDACTION_GUIDE: &str = include_str!("../prompts/pii_redaction_guide.md");

pub struct McpServer {
    analyzer: PiiAnalyzer,
}

impl McpServer {
    pub fn new(analyzer: PiiAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Reads newline-delimited requests from `reader` until EOF, writing one
    /// response line per non-notification request to `writer`.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("[redactor_mcp::server] Server started, awaiting requests");
        let mut lines = BufReader::new(reader).lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
                Ok(request) => self.handle_request(request).await,
                Err(err) => {
                    warn!("[redactor_mcp::server] Unparseable request line: {err}");
                    Some(JsonRpcResponse::error(
                        Value::Null,
                        error_code::PARSE_ERROR,
                        format!("Parse error: {err}"),
                    ))
                }
            };
            if let Some(response) = response {
                let rendered = serde_json::to_string(&response)?;
                writer.write_all(rendered.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }
        info!("[redactor_mcp::server] Input closed, shutting down");
        Ok(())
    }

    /// Dispatches a single request. Notifications return `None`.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(
                "[redactor_mcp::server] Notification '{}' acknowledged",
                request.method
            );
            return None;
        }
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {
                        "tools": {},
                        "prompts": {}
                    },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }),
            ),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => {
                JsonRpcResponse::success(id, json!({"tools": tools::tool_definitions()}))
            }
            "tools/call" => self.handle_tool_call(id, request.params).await,
            "prompts/list" => JsonRpcResponse::success(
                id,
                json!({
                    "prompts": [{
                        "name": "pii_redaction_guide",
                        "description": "A guided prompt that walks the user through PII redaction, including PII types and confidence threshold."
                    }]
                }),
            ),
            "prompts/get" => Self::handle_prompt_get(id, request.params),
            other => {
                warn!("[redactor_mcp::server] Unknown method '{other}'");
                JsonRpcResponse::error(
                    id,
                    error_code::METHOD_NOT_FOUND,
                    format!("Method not found: {other}"),
                )
            }
        };
        Some(response)
    }

    async fn handle_tool_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::error(
                id,
                error_code::INVALID_PARAMS,
                "tools/call requires params",
            );
        };
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                id,
                error_code::INVALID_PARAMS,
                "tools/call requires a tool name",
            );
        };
        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        let outcome = tools::call_tool(&self.analyzer, name, arguments).await;
        JsonRpcResponse::success(id, outcome.into_result())
    }

    fn handle_prompt_get(id: Value, params: Option<Value>) -> JsonRpcResponse {
        let name = params
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        if name != "pii_redaction_guide" {
            return JsonRpcResponse::error(
                id,
                error_code::INVALID_PARAMS,
                format!("Unknown prompt '{name}'"),
            );
        }
        JsonRpcResponse::success(
            id,
            json!({
                "messages": [{
                    "role": "user",
                    "content": {
                        "type": "text",
                        "text": PII_REDACTION_GUIDE
                    }
                }]
            }),
        )
    }
}
