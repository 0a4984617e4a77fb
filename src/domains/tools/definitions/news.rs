//! Financial news endpoints.

use super::super::catalog::{ParamSpec, ToolDefinition};
use super::common::{LIMIT, TICKER};

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "news_general",
        description: "Get the latest general financial market news.",
        path: "news/general",
        params: &[],
    },
    ToolDefinition {
        name: "news_country",
        description: "Get the latest financial news for a country.",
        path: "news/country/{country}",
        params: &[ParamSpec::required(
            "country",
            "Country",
            "Country to get news for (e.g. america, japan)",
        )],
    },
    ToolDefinition {
        name: "news_ticker",
        description: "Get the latest news mentioning a ticker.",
        path: "news/ticker/{ticker}",
        params: &[TICKER, LIMIT],
    },
];
