// redactor-mcp/src/tools.rs
//! Tool registry for the MCP server: parameter schemas, dispatch into the
//! `PiiAnalyzer`, and translation of pipeline errors into user-facing tool
//! results.

use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};

use redactor_core::{FilterCriteria, PiiAnalyzer, RedactorError};

/// Parameters shared by the three PII tools.
#[derive(Debug, Clone, Deserialize)]
pub struct PiiToolParams {
    pub text: String,
    /// Specific PII entity types to keep (e.g. ["NAME", "EMAIL"]); omitted
    /// means all types.
    #[serde(default)]
    pub pii_types: Option<Vec<String>>,
    /// Minimum confidence score to include an entity. 0.0 keeps everything.
    #[serde(default)]
    pub confidence_threshold: f64,
    /// Language of the text; auto-detected when omitted.
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectLanguageParams {
    pub text: String,
}

/// Outcome of a tool call, rendered into the MCP `content`/`isError` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutcome {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn fail(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn into_result(self) -> Value {
        json!({
            "content": [{"type": "text", "text": self.text}],
            "isError": self.is_error,
        })
    }
}

fn pii_tool_properties() -> Value {
    json!({
        "text": {
            "type": "string",
            "description": "The text content to analyze."
        },
        "pii_types": {
            "type": "array",
            "items": {"type": "string"},
            "description": "Specific PII entity types to include (e.g. [\"NAME\", \"EMAIL\"]). If omitted, all types are included."
        },
        "confidence_threshold": {
            "type": "number",
            "minimum": 0.0,
            "maximum": 1.0,
            "default": 0.0,
            "description": "Minimum confidence score to include an entity. Defaults to 0.0 (include everything)."
        },
        "language_code": {
            "type": "string",
            "description": "Language of the text (en or es). Auto-detected when omitted."
        }
    })
}

/// The tool list served by `tools/list`.
pub fn tool_definitions() -> Value {
    json!([
        {
            "name": "detect_pii",
            "description": "Detect PII entities in the provided text. Returns a list of detected entities with type, text, score, and character offsets.",
            "inputSchema": {
                "type": "object",
                "properties": pii_tool_properties(),
                "required": ["text"]
            }
        },
        {
            "name": "redact_pii",
            "description": "Redact PII entities in the provided text by replacing them with tags like [NAME], [SSN], [ADDRESS], etc.",
            "inputSchema": {
                "type": "object",
                "properties": pii_tool_properties(),
                "required": ["text"]
            }
        },
        {
            "name": "summarize_pii",
            "description": "Summarize PII entities in the provided text as per-type counts plus a total, without returning the entities themselves.",
            "inputSchema": {
                "type": "object",
                "properties": pii_tool_properties(),
                "required": ["text"]
            }
        },
        {
            "name": "detect_language",
            "description": "Detect the dominant languages of the provided text. Returns language codes, human-readable names, and confidence scores.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "The text content to analyze."
                    }
                },
                "required": ["text"]
            }
        }
    ])
}

/// Renders a pipeline error as the user-facing tool message. Classification
/// happens on the error variant, never by grepping message text.
pub fn render_tool_error(err: &RedactorError) -> String {
    match err {
        RedactorError::OracleFailure {
            credential: true, ..
        } => {
            let profile =
                std::env::var("AWS_PROFILE").unwrap_or_else(|_| "<your-profile>".to_string());
            format!(
                "AWS credentials are invalid or expired. If using SSO, run: aws sso login --profile {profile}"
            )
        }
        RedactorError::UnsupportedLanguage {
            score: Some(score), ..
        } => {
            format!("{err} (detected with confidence {score:.2})")
        }
        _ => format!("Error: {err}"),
    }
}

fn criteria_from(params: &PiiToolParams) -> Result<FilterCriteria, ToolOutcome> {
    if !(0.0..=1.0).contains(&params.confidence_threshold) {
        return Err(ToolOutcome::fail(format!(
            "Error: confidence_threshold must be within [0, 1], got {}",
            params.confidence_threshold
        )));
    }
    Ok(FilterCriteria::new(
        params.pii_types.clone(),
        params.confidence_threshold,
    ))
}

fn parse_params<T: for<'de> Deserialize<'de>>(arguments: Value) -> Result<T, ToolOutcome> {
    serde_json::from_value(arguments)
        .map_err(|err| ToolOutcome::fail(format!("Error: invalid tool arguments: {err}")))
}

/// Dispatches one `tools/call` invocation.
pub async fn call_tool(analyzer: &PiiAnalyzer, name: &str, arguments: Value) -> ToolOutcome {
    debug!("[redactor_mcp::tools] Calling tool '{name}'");
    match name {
        "detect_pii" => {
            let params: PiiToolParams = match parse_params(arguments) {
                Ok(p) => p,
                Err(outcome) => return outcome,
            };
            let criteria = match criteria_from(&params) {
                Ok(c) => c,
                Err(outcome) => return outcome,
            };
            match analyzer
                .detect_pii(&params.text, &criteria, params.language_code.as_deref())
                .await
            {
                Ok(entities) => match serde_json::to_string_pretty(&entities) {
                    Ok(rendered) => ToolOutcome::ok(rendered),
                    Err(err) => ToolOutcome::fail(format!("Error: {err}")),
                },
                Err(err) => ToolOutcome::fail(render_tool_error(&err)),
            }
        }
        "redact_pii" => {
            let params: PiiToolParams = match parse_params(arguments) {
                Ok(p) => p,
                Err(outcome) => return outcome,
            };
            let criteria = match criteria_from(&params) {
                Ok(c) => c,
                Err(outcome) => return outcome,
            };
            match analyzer
                .redact_pii(&params.text, &criteria, params.language_code.as_deref())
                .await
            {
                Ok(redacted) => ToolOutcome::ok(redacted),
                Err(err) => ToolOutcome::fail(render_tool_error(&err)),
            }
        }
        "summarize_pii" => {
            let params: PiiToolParams = match parse_params(arguments) {
                Ok(p) => p,
                Err(outcome) => return outcome,
            };
            let criteria = match criteria_from(&params) {
                Ok(c) => c,
                Err(outcome) => return outcome,
            };
            match analyzer
                .summarize_pii(&params.text, &criteria, params.language_code.as_deref())
                .await
            {
                Ok(summary) => match serde_json::to_string_pretty(&summary) {
                    Ok(rendered) => ToolOutcome::ok(rendered),
                    Err(err) => ToolOutcome::fail(format!("Error: {err}")),
                },
                Err(err) => ToolOutcome::fail(render_tool_error(&err)),
            }
        }
        "detect_language" => {
            let params: DetectLanguageParams = match parse_params(arguments) {
                Ok(p) => p,
                Err(outcome) => return outcome,
            };
            match analyzer.detect_language(&params.text).await {
                Ok(languages) => match serde_json::to_string_pretty(&languages) {
                    Ok(rendered) => ToolOutcome::ok(rendered),
                    Err(err) => ToolOutcome::fail(format!("Error: {err}")),
                },
                Err(err) => ToolOutcome::fail(render_tool_error(&err)),
            }
        }
        unknown => ToolOutcome::fail(format!("Error: unknown tool '{unknown}'")),
    }
}
