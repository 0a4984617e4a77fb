//! Tool Registry - the ListTools / CallTool surface shared by every transport.
//!
//! This module provides:
//! - Tool metadata for listing, straight from the catalog
//! - Call dispatch through the [`Dispatcher`]

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::info;

use super::builder::RequestBuilder;
use super::catalog::ToolCatalog;
use super::client::{FinanceClient, RemoteApi};
use super::dispatcher::{Dispatcher, ToolCall};
use crate::core::config::ApiConfig;
use crate::core::Result;

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    dispatcher: Dispatcher,
}

impl ToolRegistry {
    /// Create a registry backed by the real remote API.
    pub fn new(api: ApiConfig) -> Result<Self> {
        let client = FinanceClient::new(api)?;
        Ok(Self::with_remote(Arc::new(client)))
    }

    /// Create a registry backed by any [`RemoteApi`] implementation.
    pub fn with_remote(remote: Arc<dyn RemoteApi>) -> Self {
        let catalog = ToolCatalog::new();
        info!("Registered {} tools", catalog.list_tools().len());
        Self {
            dispatcher: Dispatcher::new(RequestBuilder::new(catalog), remote),
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        self.dispatcher.builder().catalog()
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.catalog().tool_names()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both the rmcp handler and the HTTP transport list tools from here.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.catalog()
            .list_tools()
            .iter()
            .map(|def| def.to_tool())
            .collect()
    }

    /// Invoke a tool. Failures come back as error envelopes.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        info!("Calling tool: {}", name);
        self.dispatcher
            .call(ToolCall::from_value(name, arguments))
            .await
    }
}
