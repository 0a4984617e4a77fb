//! Financial-data MCP server library.
//!
//! Exposes a fixed catalog of remote financial-data queries as MCP tools.
//! Each tool call is validated, turned into a single GET against the remote
//! API and answered with a text envelope; failures come back as envelopes
//! with `isError` set rather than as protocol errors.
//!
//! # Architecture
//!
//! - **core**: configuration, startup errors, the rmcp server handler and transports
//! - **domains::tools**: catalog, request builder, remote client, dispatcher
//!   and result normalizer
//!
//! # Example
//!
//! ```rust,no_run
//! use findata_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     let result = server.call_tool("news_general", serde_json::json!({})).await;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
