//! Tool definitions and the capability manifest advertised to callers.

use serde::{Deserialize, Serialize};

use crate::registry::{ToolError, ToolResult};

/// JSON value types a parameter or output field may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Whole number (rejects floats and numeric strings).
    Integer,
    /// Any JSON number.
    Number,
    /// JSON string.
    String,
    /// JSON boolean.
    Boolean,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
}

/// Declares one input parameter: name, type, requiredness, and bounds.
///
/// The same spec drives both caller validation and the advertised manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    name: String,
    #[serde(rename = "type")]
    value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    minimum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    maximum: Option<i64>,
}

impl ParamSpec {
    /// Declares an integer parameter.
    #[must_use]
    pub fn integer(name: impl Into<String>) -> Self {
        Self::typed(name, ValueType::Integer)
    }

    /// Declares a string parameter.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::typed(name, ValueType::String)
    }

    /// Declares a parameter of the given type.
    #[must_use]
    pub fn typed(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            description: None,
            required: false,
            minimum: None,
            maximum: None,
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets inclusive numeric bounds. Only meaningful for integer parameters.
    #[must_use]
    pub fn with_bounds(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    /// Sets an inclusive lower bound only.
    #[must_use]
    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared value type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns whether the parameter must be present.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the inclusive lower bound, if declared.
    #[must_use]
    pub const fn minimum(&self) -> Option<i64> {
        self.minimum
    }

    /// Returns the inclusive upper bound, if declared.
    #[must_use]
    pub const fn maximum(&self) -> Option<i64> {
        self.maximum
    }
}

/// Describes one field of a tool's output object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputField {
    name: String,
    #[serde(rename = "type")]
    value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl OutputField {
    /// Declares an output field of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            description: None,
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared value type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Complete description of one invocable tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    name: String,
    description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<ParamSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    output: Vec<OutputField>,
}

impl ToolDefinition {
    /// Starts building a tool definition.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ToolDefinitionBuilder {
        ToolDefinitionBuilder {
            name: name.into(),
            description: None,
            parameters: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Returns the tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the declared input parameters.
    #[must_use]
    pub fn parameters(&self) -> &[ParamSpec] {
        &self.parameters
    }

    /// Returns the declared output fields.
    #[must_use]
    pub fn output(&self) -> &[OutputField] {
        &self.output
    }
}

/// Builder for [`ToolDefinition`].
#[derive(Debug)]
pub struct ToolDefinitionBuilder {
    name: String,
    description: Option<String>,
    parameters: Vec<ParamSpec>,
    output: Vec<OutputField>,
}

impl ToolDefinitionBuilder {
    /// Sets the human-readable description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an input parameter.
    #[must_use]
    pub fn parameter(mut self, spec: ParamSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Adds an output field.
    #[must_use]
    pub fn output_field(mut self, field: OutputField) -> Self {
        self.output.push(field);
        self
    }

    /// Consumes the builder and returns the definition.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidDefinition`] when the tool name or
    /// description is empty, a parameter name is empty, or two parameters
    /// share a name.
    pub fn build(self) -> ToolResult<ToolDefinition> {
        if self.name.trim().is_empty() {
            return Err(ToolError::InvalidDefinition {
                reason: "tool name cannot be empty".into(),
            });
        }

        let description = self.description.unwrap_or_default();
        if description.trim().is_empty() {
            return Err(ToolError::InvalidDefinition {
                reason: "tool description cannot be empty".into(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for spec in &self.parameters {
            if spec.name().trim().is_empty() {
                return Err(ToolError::InvalidDefinition {
                    reason: "parameter name cannot be empty".into(),
                });
            }
            if !seen.insert(spec.name()) {
                return Err(ToolError::InvalidDefinition {
                    reason: format!("parameter `{}` is declared twice", spec.name()),
                });
            }
        }

        Ok(ToolDefinition {
            name: self.name,
            description,
            parameters: self.parameters,
            output: self.output,
        })
    }
}

/// The root manifest advertising every tool a registry exposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolManifest {
    tools: Vec<ToolDefinition>,
}

impl ToolManifest {
    /// Creates a manifest from the supplied definitions.
    #[must_use]
    pub fn new(tools: Vec<ToolDefinition>) -> Self {
        Self { tools }
    }

    /// Returns the advertised tool definitions.
    #[must_use]
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Returns the definition with the given name, if advertised.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|tool| tool.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_definition_with_parameters() {
        let definition = ToolDefinition::builder("find_closest_grid_point")
            .description("Finds the closest grid point.")
            .parameter(
                ParamSpec::integer("x")
                    .required()
                    .with_bounds(0, 99)
                    .with_description("X coordinate of the query."),
            )
            .output_field(OutputField::new("closest_point_id", ValueType::String))
            .build()
            .unwrap();

        assert_eq!(definition.name(), "find_closest_grid_point");
        assert_eq!(definition.parameters().len(), 1);
        let spec = &definition.parameters()[0];
        assert!(spec.is_required());
        assert_eq!(spec.minimum(), Some(0));
        assert_eq!(spec.maximum(), Some(99));
        assert_eq!(definition.output().len(), 1);
    }

    #[test]
    fn rejects_empty_name_and_description() {
        let err = ToolDefinition::builder(" ")
            .description("something")
            .build()
            .expect_err("blank name should fail");
        assert!(matches!(err, ToolError::InvalidDefinition { .. }));

        let err = ToolDefinition::builder("tool")
            .build()
            .expect_err("missing description should fail");
        assert!(matches!(err, ToolError::InvalidDefinition { .. }));
    }

    #[test]
    fn rejects_duplicate_parameter_names() {
        let err = ToolDefinition::builder("tool")
            .description("test")
            .parameter(ParamSpec::integer("x"))
            .parameter(ParamSpec::string("x"))
            .build()
            .expect_err("duplicate parameter should fail");

        assert!(matches!(
            err,
            ToolError::InvalidDefinition { reason } if reason.contains("declared twice")
        ));
    }

    #[test]
    fn serializes_wire_shape() {
        let definition = ToolDefinition::builder("echo")
            .description("Echo.")
            .parameter(ParamSpec::integer("x").required().with_bounds(0, 99))
            .build()
            .unwrap();
        let manifest = ToolManifest::new(vec![definition]);

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["tools"][0]["name"], "echo");
        assert_eq!(value["tools"][0]["parameters"][0]["type"], "integer");
        assert_eq!(value["tools"][0]["parameters"][0]["required"], true);
        assert_eq!(value["tools"][0]["parameters"][0]["minimum"], 0);
        assert_eq!(value["tools"][0]["parameters"][0]["maximum"], 99);
    }
}
