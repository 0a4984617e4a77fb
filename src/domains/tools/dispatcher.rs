//! Dispatcher - runs one tool call through builder, client and normalizer.
//!
//! Each call walks `Received -> Validated -> Dispatched -> Completed`. A call
//! that fails validation completes without ever reaching `Dispatched`, so no
//! request is sent. Calls share nothing mutable; many may be in flight.

use std::sync::Arc;

use rmcp::model::CallToolResult;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use super::builder::RequestBuilder;
use super::client::RemoteApi;
use super::error::ToolError;
use super::normalizer::normalize;

/// A single invocation as received from the tool-calling runtime.
#[derive(Debug, Clone, Default)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Build a call from a loose JSON value. Anything but an object means
    /// no arguments.
    pub fn from_value(name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(name, arguments)
    }
}

/// Lifecycle phases a call passes through before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CallPhase {
    Received,
    Validated,
    Dispatched,
}

/// A completed call: its result plus the last phase it reached.
#[derive(Debug, Clone)]
pub struct CallOutcome {
    pub reached: CallPhase,
    pub result: Result<Value, ToolError>,
}

impl CallOutcome {
    fn completed(reached: CallPhase, result: Result<Value, ToolError>) -> Self {
        Self { reached, result }
    }
}

/// Orchestrates tool calls against a remote API.
#[derive(Clone)]
pub struct Dispatcher {
    builder: Arc<RequestBuilder>,
    remote: Arc<dyn RemoteApi>,
}

impl Dispatcher {
    pub fn new(builder: RequestBuilder, remote: Arc<dyn RemoteApi>) -> Self {
        Self {
            builder: Arc::new(builder),
            remote,
        }
    }

    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Run a call to completion without formatting the result.
    #[instrument(skip(self, call), fields(tool = %call.name))]
    pub async fn dispatch(&self, call: &ToolCall) -> CallOutcome {
        debug!(phase = ?CallPhase::Received, "call received");

        let endpoint = match self.builder.build(&call.name, &call.arguments) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                debug!(phase = ?CallPhase::Received, error = %err, "call rejected");
                return CallOutcome::completed(CallPhase::Received, Err(err));
            }
        };
        debug!(phase = ?CallPhase::Validated, endpoint = %endpoint, "call validated");

        let target = endpoint.to_string();
        debug!(phase = ?CallPhase::Dispatched, "request dispatched");
        let result = self.remote.execute(&target).await;

        match &result {
            Ok(_) => info!("Tool call completed: {}", target),
            Err(err) => debug!(error = %err, "tool call failed"),
        }
        CallOutcome::completed(CallPhase::Dispatched, result)
    }

    /// Run a call and return the MCP result envelope. Never fails.
    pub async fn call(&self, call: ToolCall) -> CallToolResult {
        let outcome = self.dispatch(&call).await;
        normalize(outcome.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::catalog::ToolCatalog;
    use async_trait::async_trait;
    use rmcp::model::RawContent;
    use serde_json::json;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every path it is asked for and replies from a script.
    struct FakeRemote {
        calls: Mutex<Vec<String>>,
        reply: Box<dyn Fn(&str) -> Result<Value, ToolError> + Send + Sync>,
    }

    impl FakeRemote {
        fn new(reply: impl Fn(&str) -> Result<Value, ToolError> + Send + Sync + 'static) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply: Box::new(reply),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteApi for FakeRemote {
        async fn execute(&self, path: &str) -> Result<Value, ToolError> {
            self.calls.lock().unwrap().push(path.to_string());
            (self.reply)(path)
        }
    }

    fn dispatcher(remote: Arc<FakeRemote>) -> Dispatcher {
        Dispatcher::new(RequestBuilder::new(ToolCatalog::new()), remote)
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    fn call(name: &str, args: Value) -> ToolCall {
        ToolCall::from_value(name, args)
    }

    #[tokio::test]
    async fn test_missing_required_never_dispatches() {
        let remote = FakeRemote::new(|_| Ok(json!({})));
        let dispatcher = dispatcher(remote.clone());

        let outcome = dispatcher.dispatch(&call("credit_ratings", json!({}))).await;
        assert_eq!(outcome.reached, CallPhase::Received);

        let result = dispatcher.call(call("credit_ratings", json!({}))).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: Organization ID is required");
        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn test_no_tool_dispatches_without_required_arguments() {
        let remote = FakeRemote::new(|_| Ok(json!({})));
        let dispatcher = dispatcher(remote.clone());

        for tool in ToolCatalog::new().list_tools() {
            if tool.params.iter().any(|p| p.required) {
                let result = dispatcher.call(call(tool.name, json!({}))).await;
                assert_eq!(result.is_error, Some(true), "{} should fail", tool.name);
            }
        }
        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_an_error_envelope() {
        let remote = FakeRemote::new(|_| Ok(json!({})));
        let dispatcher = dispatcher(remote.clone());

        let result = dispatcher.call(call("bonds_yield_curve", json!({}))).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: Unknown tool: bonds_yield_curve");
        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_call_dispatches_exactly_once() {
        let remote = FakeRemote::new(|_| Ok(json!({"data": []})));
        let dispatcher = dispatcher(remote.clone());

        let outcome = dispatcher
            .dispatch(&call(
                "stocks_tickers",
                json!({"country": "america", "exchange": "NASDAQ"}),
            ))
            .await;

        assert_eq!(outcome.reached, CallPhase::Dispatched);
        assert!(outcome.result.is_ok());
        assert_eq!(
            remote.calls(),
            vec!["stocks/tickers?country=america&exchange=NASDAQ".to_string()]
        );
    }

    #[tokio::test]
    async fn test_success_payload_is_pretty_printed() {
        let payload = json!({"symbol": "BTC", "price": 64000.5});
        let reply = payload.clone();
        let remote = FakeRemote::new(move |_| Ok(reply.clone()));
        let dispatcher = dispatcher(remote.clone());

        let result = dispatcher.call(call("crypto_ticker", json!({"ticker": "BTC"}))).await;

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result), serde_json::to_string_pretty(&payload).unwrap());
        assert_eq!(remote.calls(), vec!["crypto/BTC".to_string()]);
    }

    #[tokio::test]
    async fn test_remote_failure_is_not_retried() {
        let remote = FakeRemote::new(|_| {
            Err(ToolError::RequestFailed {
                status: 404,
                body: "Not Found".to_string(),
            })
        });
        let dispatcher = dispatcher(remote.clone());

        let result = dispatcher.call(call("stocks_ticker", json!({"ticker": "ZZZZ"}))).await;

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.contains("404"));
        assert!(text.contains("Not Found"));
        assert_eq!(remote.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_calls_keep_their_own_outcomes() {
        struct SlowRemote;

        #[async_trait]
        impl RemoteApi for SlowRemote {
            async fn execute(&self, path: &str) -> Result<Value, ToolError> {
                // Earlier calls finish later.
                let delay = if path.contains("AAA") { 50 } else { 5 };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok(json!({ "path": path }))
            }
        }

        let dispatcher = Dispatcher::new(RequestBuilder::new(ToolCatalog::new()), Arc::new(SlowRemote));
        let results = futures::future::join_all([
            dispatcher.call(call("stocks_ticker", json!({"ticker": "AAA"}))),
            dispatcher.call(call("stocks_ticker", json!({"ticker": "BBB"}))),
        ])
        .await;

        assert!(text_of(&results[0]).contains("stocks/AAA"));
        assert!(text_of(&results[1]).contains("stocks/BBB"));
    }
}
