//! Request builder - turns a tool call into a remote endpoint path.
//!
//! Pure: validates arguments against the tool's declared parameters and
//! renders `path?query`. Nothing here touches the network.

use std::fmt;

use serde_json::{Map, Value};

use super::catalog::{ToolCatalog, ToolDefinition};
use super::error::ToolError;

/// A fully built request target, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    /// Path with all placeholders filled in.
    pub path: String,

    /// Serialized query string without the leading `?`. May be empty.
    pub query: String,
}

/// Renders the relative URL sent to the client: `path` or `path?query`.
impl fmt::Display for EndpointSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

/// Builds endpoint specs from the catalog.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    catalog: ToolCatalog,
}

impl RequestBuilder {
    pub fn new(catalog: ToolCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Look up `tool_name` and build its endpoint from `args`.
    pub fn build(
        &self,
        tool_name: &str,
        args: &Map<String, Value>,
    ) -> Result<EndpointSpec, ToolError> {
        let tool = self
            .catalog
            .find(tool_name)
            .ok_or_else(|| ToolError::unknown_tool(tool_name))?;
        build_endpoint(tool, args)
    }
}

/// Build the endpoint for a known tool.
///
/// The first missing required parameter, in declaration order, is reported.
pub fn build_endpoint(
    tool: &ToolDefinition,
    args: &Map<String, Value>,
) -> Result<EndpointSpec, ToolError> {
    if let Some(missing) = tool
        .params
        .iter()
        .filter(|p| p.required)
        .find(|p| present_value(args, p.name).is_none())
    {
        return Err(ToolError::Validation {
            parameter: missing.name,
            label: missing.label,
        });
    }

    let mut path = tool.path.to_string();
    let mut pairs = Vec::new();

    for param in tool.params {
        let Some(value) = present_value(args, param.name) else {
            continue;
        };
        let rendered = render_scalar(value);
        if tool.is_path_param(param) {
            path = path.replace(
                &format!("{{{}}}", param.name),
                &urlencoding::encode(&rendered),
            );
        } else {
            pairs.push(format!(
                "{}={}",
                urlencoding::encode(param.name),
                urlencoding::encode(&rendered)
            ));
        }
    }

    Ok(EndpointSpec {
        path,
        query: pairs.join("&"),
    })
}

/// The argument value, unless it is absent, `null`, or an empty string.
fn present_value<'a>(args: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    match args.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => Some(value),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder() -> RequestBuilder {
        RequestBuilder::new(ToolCatalog::new())
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn build(name: &str, value: Value) -> Result<String, ToolError> {
        builder().build(name, &args(value)).map(|e| e.to_string())
    }

    #[test]
    fn test_filters_in_declared_order() {
        let path = build(
            "stocks_tickers",
            json!({"exchange": "NASDAQ", "country": "america"}),
        )
        .unwrap();
        assert_eq!(path, "stocks/tickers?country=america&exchange=NASDAQ");
    }

    #[test]
    fn test_no_query_suffix_without_filters() {
        assert_eq!(build("crypto_tickers", json!({})).unwrap(), "crypto/tickers");
    }

    #[test]
    fn test_null_and_empty_filters_are_dropped() {
        let path = build(
            "stocks_tickers",
            json!({"country": null, "exchange": ""}),
        )
        .unwrap();
        assert_eq!(path, "stocks/tickers");

        let path = build("stocks_tickers", json!({"country": "", "exchange": "NYSE"})).unwrap();
        assert_eq!(path, "stocks/tickers?exchange=NYSE");
    }

    #[test]
    fn test_filter_values_are_percent_encoded() {
        let path = build("credit_search", json!({"query": "Acme & Sons"})).unwrap();
        assert_eq!(path, "credit/search?query=Acme%20%26%20Sons");
    }

    #[test]
    fn test_path_params_are_interpolated() {
        assert_eq!(
            build("etf_holdings", json!({"ticker": "SPY"})).unwrap(),
            "etf/SPY/holdings"
        );
        assert_eq!(
            build("credit_ratings", json!({"id": "org-42"})).unwrap(),
            "credit/ratings/org-42"
        );
        assert_eq!(
            build("news_country", json!({"country": "united kingdom"})).unwrap(),
            "news/country/united%20kingdom"
        );
    }

    #[test]
    fn test_path_and_query_params_together() {
        let path = build(
            "stocks_prices",
            json!({"end_date": "2024-12-31", "ticker": "AAPL", "start_date": "2024-01-01"}),
        )
        .unwrap();
        assert_eq!(
            path,
            "stocks/AAPL/prices?start_date=2024-01-01&end_date=2024-12-31"
        );
    }

    #[test]
    fn test_numeric_values_render_as_json_text() {
        let path = build("news_ticker", json!({"ticker": "MSFT", "limit": 5})).unwrap();
        assert_eq!(path, "news/ticker/MSFT?limit=5");
    }

    #[test]
    fn test_undeclared_arguments_are_ignored() {
        let path = build("news_general", json!({"foo": "bar"})).unwrap();
        assert_eq!(path, "news/general");
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = build("credit_ratings", json!({})).unwrap_err();
        assert_eq!(
            err,
            ToolError::Validation {
                parameter: "id",
                label: "Organization ID",
            }
        );
        assert_eq!(err.to_string(), "Organization ID is required");
    }

    #[test]
    fn test_empty_or_null_required_parameter() {
        assert!(matches!(
            build("stocks_ticker", json!({"ticker": ""})),
            Err(ToolError::Validation { parameter: "ticker", .. })
        ));
        assert!(matches!(
            build("stocks_ticker", json!({"ticker": null})),
            Err(ToolError::Validation { parameter: "ticker", .. })
        ));
    }

    #[test]
    fn test_every_required_parameter_is_enforced() {
        let catalog = ToolCatalog::new();
        for tool in catalog.list_tools() {
            for param in tool.params.iter().filter(|p| p.required) {
                // Supply every other required parameter.
                let mut supplied = Map::new();
                for other in tool.params.iter().filter(|p| p.required && p.name != param.name) {
                    supplied.insert(other.name.to_string(), json!("x"));
                }
                let err = build_endpoint(tool, &supplied).unwrap_err();
                assert_eq!(
                    err,
                    ToolError::Validation {
                        parameter: param.name,
                        label: param.label,
                    },
                    "{} should require {}",
                    tool.name,
                    param.name
                );
            }
        }
    }

    #[test]
    fn test_unknown_tool() {
        let err = build("stocks_everything", json!({})).unwrap_err();
        assert_eq!(err, ToolError::unknown_tool("stocks_everything"));
    }
}
