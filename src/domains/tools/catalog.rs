//! Tool catalog - the static, ordered table of every exposed tool.
//!
//! Each [`ToolDefinition`] pairs the MCP-facing metadata (name, description,
//! parameter schema) with the endpoint template used to reach the remote API.
//! The table itself lives in `definitions/`, one file per endpoint family.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::{Map, Value, json};

use super::definitions::FAMILIES;

/// JSON type of a tool parameter, as advertised in the input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
}

impl ParamKind {
    fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Argument key as sent by the client.
    pub name: &'static str,

    /// Human name used in "is required" messages.
    pub label: &'static str,

    pub kind: ParamKind,

    pub description: &'static str,

    pub required: bool,
}

impl ParamSpec {
    /// A required string parameter.
    pub const fn required(
        name: &'static str,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::String,
            description,
            required: true,
        }
    }

    /// An optional string parameter.
    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            label: name,
            kind: ParamKind::String,
            description,
            required: false,
        }
    }

    /// An optional numeric parameter.
    pub const fn optional_number(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            label: name,
            kind: ParamKind::Number,
            description,
            required: false,
        }
    }
}

/// A tool exposed over MCP and the remote endpoint it maps to.
#[derive(Debug, Clone, Copy)]
pub struct ToolDefinition {
    /// Tool name as registered in MCP. Unique across the catalog.
    pub name: &'static str,

    /// Tool description shown to clients.
    pub description: &'static str,

    /// Endpoint path relative to the API base URL. `{param}` segments are
    /// filled from required parameters of the same name.
    pub path: &'static str,

    /// Parameters in declaration order. Query strings follow this order.
    pub params: &'static [ParamSpec],
}

impl ToolDefinition {
    /// Whether `param` is interpolated into the path rather than the query.
    pub fn is_path_param(&self, param: &ParamSpec) -> bool {
        param.required && self.path.contains(&format!("{{{}}}", param.name))
    }

    /// JSON Schema for this tool's arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for param in self.params {
            properties.insert(
                param.name.to_string(),
                json!({
                    "type": param.kind.schema_type(),
                    "description": param.description,
                }),
            );
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }

        schema
    }

    /// Create a Tool model for this definition (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Read-only view over the full tool table.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<&'static ToolDefinition>,
}

impl ToolCatalog {
    /// Build the catalog from every endpoint family, in declaration order.
    pub fn new() -> Self {
        Self {
            tools: FAMILIES.iter().flat_map(|family| family.iter()).collect(),
        }
    }

    /// All definitions, in the order they are advertised.
    pub fn list_tools(&self) -> &[&'static ToolDefinition] {
        &self.tools
    }

    /// Look up a definition by tool name.
    pub fn find(&self, name: &str) -> Option<&'static ToolDefinition> {
        self.tools.iter().copied().find(|t| t.name == name)
    }

    /// All tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tool_names_are_unique() {
        let catalog = ToolCatalog::new();
        let names = catalog.tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len(), "duplicate tool names: {:?}", names);
    }

    #[test]
    fn test_indices_tools_listed_once() {
        let catalog = ToolCatalog::new();
        for name in ["indices_tickers", "indices_ticker", "indices_prices"] {
            let count = catalog.tool_names().iter().filter(|n| **n == name).count();
            assert_eq!(count, 1, "{} should appear exactly once", name);
        }
    }

    #[test]
    fn test_news_general_has_empty_schema() {
        let catalog = ToolCatalog::new();
        let matches: Vec<_> = catalog
            .list_tools()
            .iter()
            .filter(|t| t.name == "news_general")
            .collect();
        assert_eq!(matches.len(), 1);

        let schema = matches[0].input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"], json!({}));
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_credit_ratings_schema_requires_id() {
        let catalog = ToolCatalog::new();
        let tool = catalog.find("credit_ratings").unwrap();
        let schema = tool.input_schema();
        assert_eq!(schema["required"], json!(["id"]));
        assert_eq!(schema["properties"]["id"]["type"], "string");
    }

    #[test]
    fn test_path_params_match_templates() {
        // Every placeholder must be backed by a required parameter.
        let catalog = ToolCatalog::new();
        for tool in catalog.list_tools() {
            let mut rest = tool.path;
            while let Some(start) = rest.find('{') {
                let end = rest[start..].find('}').unwrap() + start;
                let placeholder = &rest[start + 1..end];
                let param = tool.params.iter().find(|p| p.name == placeholder);
                assert!(
                    param.is_some_and(|p| p.required),
                    "{}: placeholder {{{}}} has no required parameter",
                    tool.name,
                    placeholder
                );
                rest = &rest[end + 1..];
            }
        }
    }

    #[test]
    fn test_to_tool_carries_metadata() {
        let catalog = ToolCatalog::new();
        let tool = catalog.find("stocks_tickers").unwrap().to_tool();
        assert_eq!(tool.name, "stocks_tickers");
        assert!(tool.description.is_some());
        assert!(tool.input_schema["properties"].get("country").is_some());
        assert!(tool.input_schema["properties"].get("exchange").is_some());
    }

    #[test]
    fn test_find_unknown_tool() {
        assert!(ToolCatalog::new().find("does_not_exist").is_none());
    }
}
