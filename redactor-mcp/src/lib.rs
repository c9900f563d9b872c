// redactor-mcp/src/lib.rs
//! # Redactor MCP Server
//!
//! This crate provides the MCP (Model Context Protocol) transport for the
//! redactor pipeline: a JSON-RPC 2.0 stdio server exposing PII detection,
//! redaction, summarization, and language detection tools backed by AWS
//! Comprehend.

pub mod comprehend;
pub mod logger;
pub mod protocol;
pub mod server;
pub mod tools;

pub use comprehend::{ComprehendOracle, CredentialRetry};
pub use server::McpServer;
