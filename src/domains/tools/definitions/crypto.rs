//! Cryptocurrency endpoints.

use super::super::catalog::{ParamSpec, ToolDefinition};
use super::common::{END_DATE, INTERVAL, START_DATE, TICKER};

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "crypto_tickers",
        description: "List available cryptocurrency tickers, optionally filtered by asset type.",
        path: "crypto/tickers",
        params: &[ParamSpec::optional("type", "Asset type filter (e.g. coin, token, stablecoin)")],
    },
    ToolDefinition {
        name: "crypto_ticker",
        description: "Get market data and project details for a cryptocurrency ticker.",
        path: "crypto/{ticker}",
        params: &[TICKER],
    },
    ToolDefinition {
        name: "crypto_prices",
        description: "Get historical prices for a cryptocurrency ticker over an optional date range.",
        path: "crypto/{ticker}/prices",
        params: &[TICKER, START_DATE, END_DATE, INTERVAL],
    },
];
