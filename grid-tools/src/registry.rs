//! Runtime registry for tool definitions and execution.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::manifest::{ToolDefinition, ToolManifest};
use crate::params::validate_parameters;

/// Result alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Trait implemented by tool executors.
///
/// Parameters arrive already validated against the registered
/// [`ToolDefinition`]; executors read the fields they declared and return a
/// JSON value matching their declared output shape.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Invokes the tool with validated JSON parameters, returning JSON output.
    async fn invoke(&self, params: Map<String, Value>) -> ToolResult<Value>;
}

#[async_trait]
impl<F, Fut> Tool for F
where
    F: Send + Sync + Fn(Map<String, Value>) -> Fut,
    Fut: Future<Output = ToolResult<Value>> + Send,
{
    async fn invoke(&self, params: Map<String, Value>) -> ToolResult<Value> {
        (self)(params).await
    }
}

/// Handle returned by the registry for direct invocation.
#[derive(Clone)]
pub struct ToolHandle {
    definition: ToolDefinition,
    executor: Arc<dyn Tool>,
}

impl ToolHandle {
    /// Returns the definition associated with this handle.
    #[must_use]
    pub fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    /// Executes the underlying tool implementation.
    ///
    /// # Errors
    ///
    /// Propagates any [`ToolError::Execution`] returned by the underlying
    /// implementation.
    pub async fn invoke(&self, params: Map<String, Value>) -> ToolResult<Value> {
        self.executor.invoke(params).await
    }
}

/// Registry that stores tool implementations keyed by name.
///
/// Registration happens once at process startup; dispatch afterward only
/// takes read access, so the registry can serve concurrent callers.
#[derive(Default)]
pub struct ToolRegistry {
    inner: RwLock<HashMap<String, ToolHandle>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("tool registry poisoned");
        let names: Vec<_> = inner.keys().cloned().collect();
        f.debug_struct("ToolRegistry")
            .field("registered", &names)
            .finish()
    }
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool implementation under its definition's name.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::DuplicateTool`] if the name is already present.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    pub fn register_tool<T>(&self, definition: ToolDefinition, tool: T) -> ToolResult<()>
    where
        T: Tool + 'static,
    {
        let mut inner = self.inner.write().expect("tool registry poisoned");
        let name = definition.name().to_owned();
        if inner.contains_key(&name) {
            return Err(ToolError::DuplicateTool { name });
        }

        debug!(tool = %name, "tool registered");
        inner.insert(
            name,
            ToolHandle {
                definition,
                executor: Arc::new(tool),
            },
        );

        Ok(())
    }

    /// Returns a handle to the tool matching the supplied name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ToolHandle> {
        let inner = self.inner.read().ok()?;
        inner.get(name).cloned()
    }

    /// Dispatches an invocation to a registered tool.
    ///
    /// The tool name resolves first, before any parameter is inspected;
    /// parameters are then validated against the registered definition, and
    /// only a fully valid set reaches the executor.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ToolNotFound`] for an unknown name,
    /// [`ToolError::Validation`] when parameters fail the declared schema,
    /// or propagates [`ToolError::Execution`] from the implementation.
    pub async fn invoke(&self, name: &str, params: Map<String, Value>) -> ToolResult<Value> {
        let handle = self.get(name).ok_or_else(|| ToolError::ToolNotFound {
            name: name.to_owned(),
        })?;
        validate_parameters(handle.definition(), &params)?;
        debug!(tool = %name, "invoking tool");
        handle.invoke(params).await
    }

    /// Lists the definitions of all registered tools, sorted by name.
    ///
    /// # Panics
    ///
    /// Panics if the internal registry lock is poisoned.
    #[must_use]
    pub fn list(&self) -> Vec<ToolDefinition> {
        let inner = self.inner.read().expect("tool registry poisoned");
        let mut definitions: Vec<_> = inner
            .values()
            .map(|handle| handle.definition.clone())
            .collect();
        definitions.sort_by(|a, b| a.name().cmp(b.name()));
        definitions
    }

    /// Builds the capability manifest advertising every registered tool.
    ///
    /// The manifest is derived from the same definitions that drive
    /// validation. Registry contents are fixed after startup, so callers may
    /// fetch this once and reuse it.
    #[must_use]
    pub fn manifest(&self) -> ToolManifest {
        ToolManifest::new(self.list())
    }
}

/// Errors produced by tool registration and invocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    /// Tool definition failed validation at registration time.
    #[error("invalid tool definition: {reason}")]
    InvalidDefinition {
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Tool name collided with an existing registration.
    #[error("tool `{name}` is already registered")]
    DuplicateTool {
        /// Name of the offending tool.
        name: String,
    },

    /// Requested tool does not exist.
    #[error("tool `{name}` is not registered")]
    ToolNotFound {
        /// Name of the missing tool.
        name: String,
    },

    /// Caller parameters failed the declared schema.
    #[error("parameter validation failed: {reason}")]
    Validation {
        /// Description of every field that failed and why.
        reason: String,
    },

    /// Tool execution failed.
    #[error("tool execution failed: {reason}")]
    Execution {
        /// Human-readable error returned by the tool implementation.
        reason: String,
    },
}

impl ToolError {
    /// Creates an execution error from the supplied reason.
    #[must_use]
    pub fn execution(reason: impl Into<String>) -> Self {
        Self::Execution {
            reason: reason.into(),
        }
    }

    /// Creates a validation error from the supplied reason.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::manifest::{ParamSpec, ToolDefinition};
    use serde_json::json;

    fn echo_definition() -> ToolDefinition {
        ToolDefinition::builder("echo")
            .description("Echo incoming payload")
            .parameter(ParamSpec::string("message").required())
            .build()
            .unwrap()
    }

    fn params(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn register_and_invoke_tool() {
        let registry = ToolRegistry::new();
        registry
            .register_tool(echo_definition(), |input: Map<String, Value>| async move {
                Ok(Value::Object(input))
            })
            .unwrap();

        let payload = params(json!({ "message": "hello" }));
        let output = registry.invoke("echo", payload.clone()).await.unwrap();
        assert_eq!(output, Value::Object(payload));
    }

    #[tokio::test]
    async fn duplicate_registration_errors() {
        let registry = ToolRegistry::new();

        registry
            .register_tool(echo_definition(), |input: Map<String, Value>| async move {
                Ok(Value::Object(input))
            })
            .unwrap();

        let err = registry
            .register_tool(echo_definition(), |input: Map<String, Value>| async move {
                Ok(Value::Object(input))
            })
            .expect_err("duplicate registration should fail");

        assert!(matches!(err, ToolError::DuplicateTool { name } if name == "echo"));
    }

    #[tokio::test]
    async fn unknown_tool_errors_before_validation() {
        let registry = ToolRegistry::new();
        // Parameters are nonsense on purpose; the name must fail first.
        let err = registry
            .invoke("missing", params(json!({ "message": 42 })))
            .await
            .expect_err("unknown tool should error");

        assert!(matches!(err, ToolError::ToolNotFound { name } if name == "missing"));
    }

    #[tokio::test]
    async fn invalid_parameters_never_reach_executor() {
        let registry = ToolRegistry::new();
        registry
            .register_tool(echo_definition(), |_input: Map<String, Value>| async move {
                panic!("executor must not run for invalid input")
            })
            .unwrap();

        let err = registry
            .invoke("echo", params(json!({ "message": 42 })))
            .await
            .expect_err("wrong type should fail validation");

        assert!(matches!(err, ToolError::Validation { .. }));
    }

    #[tokio::test]
    async fn lists_definitions_sorted_by_name() {
        let registry = ToolRegistry::new();
        for name in ["zeta", "alpha"] {
            let definition = ToolDefinition::builder(name)
                .description("test tool")
                .build()
                .unwrap();
            registry
                .register_tool(definition, |_input: Map<String, Value>| async move {
                    Ok(Value::Null)
                })
                .unwrap();
        }

        let names: Vec<_> = registry
            .list()
            .iter()
            .map(|definition| definition.name().to_owned())
            .collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }
}
