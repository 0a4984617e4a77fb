//! Tool-specific error types.

use thiserror::Error;

/// Errors that can end a tool call.
///
/// Every variant is recovered into an error envelope by the normalizer;
/// none of them escapes to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// A required argument was missing, null, or empty.
    #[error("{label} is required")]
    Validation {
        parameter: &'static str,
        label: &'static str,
    },

    /// The remote API answered with a non-success status.
    #[error("API request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// No response was received (DNS, connect, timeout...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The response could not be used, or something else went wrong.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    /// Create a new "transport" error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new "unexpected" error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Whether this error was raised before any network access.
    pub fn is_pre_dispatch(&self) -> bool {
        matches!(self, Self::UnknownTool { .. } | Self::Validation { .. })
    }
}
