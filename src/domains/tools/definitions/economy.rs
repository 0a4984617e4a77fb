//! Macroeconomic indicator endpoints.

use super::super::catalog::{ParamSpec, ToolDefinition};
use super::common::{COUNTRY_FILTER, END_DATE, START_DATE};

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "economy_indicators",
        description: "List available economic indicators, optionally filtered by country.",
        path: "economy/indicators",
        params: &[COUNTRY_FILTER],
    },
    ToolDefinition {
        name: "economy_indicator",
        description: "Get the time series for one economic indicator (e.g. GDP, CPI, unemployment).",
        path: "economy/indicators/{indicator}",
        params: &[
            ParamSpec::required("indicator", "Indicator code", "Indicator code (e.g. gdp, cpi)"),
            COUNTRY_FILTER,
            START_DATE,
            END_DATE,
        ],
    },
];
