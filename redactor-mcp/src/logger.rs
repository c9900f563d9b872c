// redactor-mcp/src/logger.rs
//! Logger bootstrap for the server binary.
//!
//! All log output is routed to stderr: stdout carries the JSON-RPC protocol
//! stream and must never receive anything else. `RUST_LOG` still applies
//! unless an explicit level override is given.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr);
    // try_init so tests and embedders that already installed a logger don't panic.
    let _ = builder.try_init();
}
