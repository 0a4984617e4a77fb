//! Domains module containing the server's business logic.
//!
//! The server exposes a single bounded context: the financial-data tools.

pub mod tools;
