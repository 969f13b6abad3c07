//! Reply envelopes translating invocation outcomes for transport callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::{ToolError, ToolResult};

/// Error kinds reported to callers, with their wire spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller input failed schema or range constraints.
    ValidationError,
    /// The requested tool name is not registered.
    ToolNotFound,
    /// The tool failed internally after validation passed.
    ExecutionError,
}

impl ErrorKind {
    /// HTTP status hint for transport collaborators.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::ValidationError => 422,
            Self::ToolNotFound => 404,
            Self::ExecutionError => 500,
        }
    }
}

impl From<&ToolError> for ErrorKind {
    fn from(error: &ToolError) -> Self {
        match error {
            ToolError::Validation { .. } => Self::ValidationError,
            ToolError::ToolNotFound { .. } => Self::ToolNotFound,
            ToolError::InvalidDefinition { .. }
            | ToolError::DuplicateTool { .. }
            | ToolError::Execution { .. } => Self::ExecutionError,
        }
    }
}

/// Structured result of one tool invocation.
///
/// Every invocation maps to exactly one reply; nothing is swallowed. The
/// serialized shape matches what transport collaborators put on the wire:
/// `{tool_name, output}` on success, `{tool_name, error, error_type}` on
/// failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvocationReply {
    /// The tool ran and produced output.
    Success {
        /// Name of the invoked tool.
        tool_name: String,
        /// JSON output produced by the tool.
        output: Value,
    },
    /// The invocation failed before or during execution.
    Failure {
        /// Name of the requested tool.
        tool_name: String,
        /// Human-readable description of the failure.
        error: String,
        /// Machine-readable failure kind.
        error_type: ErrorKind,
    },
}

impl InvocationReply {
    /// Wraps an invocation outcome into its reply envelope.
    #[must_use]
    pub fn from_result(tool_name: impl Into<String>, result: ToolResult<Value>) -> Self {
        let tool_name = tool_name.into();
        match result {
            Ok(output) => Self::Success { tool_name, output },
            Err(error) => Self::Failure {
                tool_name,
                error_type: ErrorKind::from(&error),
                error: error.to_string(),
            },
        }
    }

    /// Returns the tool name the reply refers to.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        match self {
            Self::Success { tool_name, .. } | Self::Failure { tool_name, .. } => tool_name,
        }
    }

    /// Returns `true` for success replies.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the failure kind, if this reply is a failure.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_type, .. } => Some(*error_type),
        }
    }

    /// HTTP status hint: 200 for success, the kind's status otherwise.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.error_kind().map_or(200, ErrorKind::http_status)
    }
}
