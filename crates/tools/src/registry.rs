use std::collections::HashMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;

/// One callable backend tool. Implementations take already-parsed JSON
/// arguments and return JSON values; failures that a caller can act on are
/// structured error bodies, not `Err`.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, input: Value) -> Result<Value>;
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub async fn execute(&self, name: &str, input: Value) -> Result<Value> {
        match self.get(name) {
            Some(tool) => tool.execute(input).await,
            None => Err(anyhow!("unknown tool: {name}")),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::{Tool, ToolRegistry};

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &'static str {
            "echo"
        }

        async fn execute(&self, input: Value) -> Result<Value> {
            Ok(input)
        }
    }

    #[tokio::test]
    async fn dispatches_to_a_registered_tool() {
        let mut registry = ToolRegistry::default();
        registry.register(EchoTool);

        let output = registry.execute("echo", json!({"ping": true})).await.expect("dispatch");
        assert_eq!(output, json!({"ping": true}));
        assert_eq!(registry.names(), vec!["echo"]);
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let registry = ToolRegistry::default();
        let error = registry.execute("nope", json!({})).await.expect_err("unknown tool");
        assert!(error.to_string().contains("nope"));
    }
}
