//! Exchange-traded fund endpoints.

use super::super::catalog::ToolDefinition;
use super::common::{COUNTRY_FILTER, END_DATE, EXCHANGE_FILTER, START_DATE, TICKER};

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "etf_tickers",
        description: "List available ETF tickers, optionally filtered by country and exchange.",
        path: "etf/tickers",
        params: &[COUNTRY_FILTER, EXCHANGE_FILTER],
    },
    ToolDefinition {
        name: "etf_ticker",
        description: "Get fund profile, issuer and expense ratio for an ETF ticker.",
        path: "etf/{ticker}",
        params: &[TICKER],
    },
    ToolDefinition {
        name: "etf_prices",
        description: "Get historical prices for an ETF ticker over an optional date range.",
        path: "etf/{ticker}/prices",
        params: &[TICKER, START_DATE, END_DATE],
    },
    ToolDefinition {
        name: "etf_holdings",
        description: "Get the current holdings and their weights for an ETF ticker.",
        path: "etf/{ticker}/holdings",
        params: &[TICKER],
    },
];
