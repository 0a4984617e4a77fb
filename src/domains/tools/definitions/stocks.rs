//! Stock market endpoints.

use super::super::catalog::{ParamSpec, ToolDefinition};
use super::common::{COUNTRY_FILTER, END_DATE, EXCHANGE_FILTER, INTERVAL, START_DATE, TICKER};

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "stocks_tickers",
        description: "List available stock tickers, optionally filtered by country and exchange.",
        path: "stocks/tickers",
        params: &[COUNTRY_FILTER, EXCHANGE_FILTER],
    },
    ToolDefinition {
        name: "stocks_ticker",
        description: "Get company profile and listing details for a stock ticker.",
        path: "stocks/{ticker}",
        params: &[TICKER],
    },
    ToolDefinition {
        name: "stocks_prices",
        description: "Get historical prices for a stock ticker over an optional date range.",
        path: "stocks/{ticker}/prices",
        params: &[TICKER, START_DATE, END_DATE, INTERVAL],
    },
    ToolDefinition {
        name: "stocks_financials",
        description: "Get income statement, balance sheet and cash flow figures for a stock ticker.",
        path: "stocks/{ticker}/financials",
        params: &[
            TICKER,
            ParamSpec::optional("period", "Reporting period (annual or quarterly)"),
        ],
    },
    ToolDefinition {
        name: "stocks_dividends",
        description: "Get the dividend history for a stock ticker.",
        path: "stocks/{ticker}/dividends",
        params: &[TICKER, START_DATE, END_DATE],
    },
    ToolDefinition {
        name: "stocks_search",
        description: "Search stocks by company name or ticker symbol.",
        path: "stocks/search",
        params: &[
            ParamSpec::required("query", "Search query", "Company name or ticker to search for"),
            COUNTRY_FILTER,
        ],
    },
];
