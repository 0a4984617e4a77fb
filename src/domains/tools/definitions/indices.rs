//! Market index endpoints.

use super::super::catalog::{ParamSpec, ToolDefinition};
use super::common::{COUNTRY_FILTER, END_DATE, START_DATE};

const INDEX_TICKER: ParamSpec =
    ParamSpec::required("ticker", "Index symbol", "Index symbol (e.g. SPX, DAX)");

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "indices_tickers",
        description: "List available market indices, optionally filtered by country.",
        path: "indices/tickers",
        params: &[COUNTRY_FILTER],
    },
    ToolDefinition {
        name: "indices_ticker",
        description: "Get details and constituents summary for a market index.",
        path: "indices/{ticker}",
        params: &[INDEX_TICKER],
    },
    ToolDefinition {
        name: "indices_prices",
        description: "Get historical levels for a market index over an optional date range.",
        path: "indices/{ticker}/prices",
        params: &[INDEX_TICKER, START_DATE, END_DATE],
    },
];
