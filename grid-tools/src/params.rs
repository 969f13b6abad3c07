//! Parameter validation against declared tool schemas.

use serde_json::{Map, Value};

use crate::manifest::{ParamSpec, ToolDefinition, ValueType};
use crate::registry::{ToolError, ToolResult};

/// Validates caller parameters against the definition's declared specs.
///
/// Every failing field is reported in one pass: missing, wrong type, and
/// out-of-range problems are collected rather than returned one at a time.
/// Values are never clamped or coerced; a float or numeric string where an
/// integer is declared is a type error. Undeclared extra fields are ignored.
///
/// # Errors
///
/// Returns [`ToolError::Validation`] describing each offending field.
pub fn validate_parameters(
    definition: &ToolDefinition,
    params: &Map<String, Value>,
) -> ToolResult<()> {
    let mut issues = Vec::new();

    for spec in definition.parameters() {
        match params.get(spec.name()) {
            None if spec.is_required() => {
                issues.push(format!("`{}` is required but missing", spec.name()));
            }
            None => {}
            Some(value) => check_value(spec, value, &mut issues),
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ToolError::Validation {
            reason: issues.join("; "),
        })
    }
}

fn check_value(spec: &ParamSpec, value: &Value, issues: &mut Vec<String>) {
    let name = spec.name();
    match spec.value_type() {
        ValueType::Integer => match value.as_i64() {
            Some(number) => check_bounds(spec, number, issues),
            None => issues.push(format!(
                "`{name}` must be an integer, got {}",
                describe(value)
            )),
        },
        ValueType::Number => {
            if !value.is_number() {
                issues.push(format!("`{name}` must be a number, got {}", describe(value)));
            }
        }
        ValueType::String => {
            if !value.is_string() {
                issues.push(format!("`{name}` must be a string, got {}", describe(value)));
            }
        }
        ValueType::Boolean => {
            if !value.is_boolean() {
                issues.push(format!(
                    "`{name}` must be a boolean, got {}",
                    describe(value)
                ));
            }
        }
        ValueType::Array => {
            if !value.is_array() {
                issues.push(format!("`{name}` must be an array, got {}", describe(value)));
            }
        }
        ValueType::Object => {
            if !value.is_object() {
                issues.push(format!(
                    "`{name}` must be an object, got {}",
                    describe(value)
                ));
            }
        }
    }
}

fn check_bounds(spec: &ParamSpec, number: i64, issues: &mut Vec<String>) {
    let name = spec.name();
    match (spec.minimum(), spec.maximum()) {
        (Some(minimum), Some(maximum)) if number < minimum || number > maximum => {
            issues.push(format!(
                "`{name}` value {number} is outside the range {minimum}..={maximum}"
            ));
        }
        (Some(minimum), None) if number < minimum => {
            issues.push(format!(
                "`{name}` value {number} is below the minimum {minimum}"
            ));
        }
        (None, Some(maximum)) if number > maximum => {
            issues.push(format!(
                "`{name}` value {number} is above the maximum {maximum}"
            ));
        }
        _ => {}
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(number) if number.is_i64() || number.is_u64() => "an integer",
        Value::Number(_) => "a non-integer number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
