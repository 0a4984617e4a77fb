//! Tools domain module.
//!
//! Every tool maps one MCP call onto one GET against the remote
//! financial-data API.
//!
//! ## Architecture
//!
//! - `definitions/` - The endpoint table, one file per API family
//! - `catalog.rs` - Tool definition types and the ordered catalog
//! - `builder.rs` - Argument validation and path/query rendering
//! - `client.rs` - The HTTP client behind the [`RemoteApi`] seam
//! - `dispatcher.rs` - Per-call lifecycle
//! - `normalizer.rs` - Outcome to MCP result envelope
//! - `registry.rs` - ListTools / CallTool surface used by the transports
//!
//! ## Adding a New Tool
//!
//! Add a [`ToolDefinition`] to the matching family in `definitions/`. The
//! builder, dispatcher and transports pick it up without further changes.

pub mod builder;
pub mod catalog;
pub mod client;
mod definitions;
pub mod dispatcher;
mod error;
pub mod normalizer;
mod registry;

pub use builder::{EndpointSpec, RequestBuilder};
pub use catalog::{ParamKind, ParamSpec, ToolCatalog, ToolDefinition};
pub use client::{FinanceClient, RemoteApi};
pub use dispatcher::{CallOutcome, CallPhase, Dispatcher, ToolCall};
pub use error::ToolError;
pub use normalizer::normalize;
pub use registry::ToolRegistry;
