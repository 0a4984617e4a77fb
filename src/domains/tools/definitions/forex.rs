//! Foreign exchange endpoints.

use super::super::catalog::{ParamSpec, ToolDefinition};
use super::common::{END_DATE, START_DATE};

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "forex_pairs",
        description: "List available currency pairs.",
        path: "forex/pairs",
        params: &[],
    },
    ToolDefinition {
        name: "forex_rates",
        description: "Get historical exchange rates for a currency pair over an optional date range.",
        path: "forex/{pair}/rates",
        params: &[
            ParamSpec::required("pair", "Currency pair", "Currency pair (e.g. EURUSD)"),
            START_DATE,
            END_DATE,
        ],
    },
];
