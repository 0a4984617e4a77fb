//! Credit rating endpoints.

use super::super::catalog::{ParamSpec, ToolDefinition};
use super::common::LIMIT;

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        name: "credit_search",
        description: "Search rated organizations by name. Returns IDs usable with credit_ratings.",
        path: "credit/search",
        params: &[
            ParamSpec::required("query", "Search query", "Organization name to search for"),
            LIMIT,
        ],
    },
    ToolDefinition {
        name: "credit_ratings",
        description: "Get the credit rating history of an organization.",
        path: "credit/ratings/{id}",
        params: &[ParamSpec::required(
            "id",
            "Organization ID",
            "Organization ID as returned by credit_search",
        )],
    },
];
