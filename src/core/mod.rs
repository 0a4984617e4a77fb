//! Core module containing shared infrastructure components.
//!
//! Configuration, startup errors, the rmcp server handler and the
//! transport layer that connects it to a tool-calling runtime.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{ApiConfig, Config};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
