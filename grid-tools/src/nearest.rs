//! The closest-point tool.

use std::sync::Arc;

use async_trait::async_trait;
use grid_index::PointIndex;
use grid_primitives::{GRID_MAX, GRID_MIN, NearestMatch};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::manifest::{OutputField, ParamSpec, ToolDefinition, ValueType};
use crate::registry::{Tool, ToolError, ToolRegistry, ToolResult};

/// Registered name of the closest-point tool.
pub const FIND_CLOSEST_TOOL: &str = "find_closest_grid_point";

/// Configurable wire names for the coordinate parameters.
///
/// Deployments disagree on `x`/`y` versus `x_coordinate`/`y_coordinate`;
/// the naming is configuration, not a logic path. The chosen names flow
/// into both the validation specs and the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateNaming {
    x: String,
    y: String,
}

impl CoordinateNaming {
    /// Creates a naming with custom field names.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidDefinition`] when either name is empty.
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> ToolResult<Self> {
        let x = x.into();
        let y = y.into();
        if x.trim().is_empty() || y.trim().is_empty() {
            return Err(ToolError::InvalidDefinition {
                reason: "coordinate field names cannot be empty".into(),
            });
        }
        Ok(Self { x, y })
    }

    /// The `x_coordinate`/`y_coordinate` naming used by verbose deployments.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            x: "x_coordinate".into(),
            y: "y_coordinate".into(),
        }
    }

    /// Returns the x parameter name.
    #[must_use]
    pub fn x(&self) -> &str {
        &self.x
    }

    /// Returns the y parameter name.
    #[must_use]
    pub fn y(&self) -> &str {
        &self.y
    }
}

impl Default for CoordinateNaming {
    fn default() -> Self {
        Self {
            x: "x".into(),
            y: "y".into(),
        }
    }
}

/// Success payload of the closest-point tool, in wire field order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosestPointReply {
    /// Id of the winning catalog point.
    pub closest_point_id: String,
    /// X coordinate of the winning point.
    pub closest_x: i64,
    /// Y coordinate of the winning point.
    pub closest_y: i64,
    /// Euclidean distance from the query to the winning point.
    pub distance_to_closest: f64,
}

impl From<NearestMatch> for ClosestPointReply {
    fn from(hit: NearestMatch) -> Self {
        Self {
            closest_point_id: hit.id().as_str().to_owned(),
            closest_x: hit.x(),
            closest_y: hit.y(),
            distance_to_closest: hit.distance(),
        }
    }
}

/// Tool wrapping [`PointIndex::nearest`] behind the invocation contract.
#[derive(Debug, Clone)]
pub struct NearestPointTool {
    index: Arc<PointIndex>,
    naming: CoordinateNaming,
}

impl NearestPointTool {
    /// Creates the tool with the default `x`/`y` parameter names.
    #[must_use]
    pub fn new(index: Arc<PointIndex>) -> Self {
        Self::with_naming(index, CoordinateNaming::default())
    }

    /// Creates the tool with the supplied parameter naming.
    #[must_use]
    pub fn with_naming(index: Arc<PointIndex>, naming: CoordinateNaming) -> Self {
        Self { index, naming }
    }

    /// Builds the tool definition for the configured naming.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidDefinition`] when the configured naming
    /// produces an invalid definition (e.g. both axes share one name).
    pub fn definition(&self) -> ToolResult<ToolDefinition> {
        ToolDefinition::builder(FIND_CLOSEST_TOOL)
            .description(
                "Finds the closest predefined grid point to the given integer \
                 coordinates (0-99 range).",
            )
            .parameter(
                ParamSpec::integer(self.naming.x())
                    .required()
                    .with_bounds(GRID_MIN, GRID_MAX)
                    .with_description("X coordinate of the query point."),
            )
            .parameter(
                ParamSpec::integer(self.naming.y())
                    .required()
                    .with_bounds(GRID_MIN, GRID_MAX)
                    .with_description("Y coordinate of the query point."),
            )
            .output_field(
                OutputField::new("closest_point_id", ValueType::String)
                    .with_description("Id of the closest grid point."),
            )
            .output_field(
                OutputField::new("closest_x", ValueType::Integer)
                    .with_description("X coordinate of the closest grid point."),
            )
            .output_field(
                OutputField::new("closest_y", ValueType::Integer)
                    .with_description("Y coordinate of the closest grid point."),
            )
            .output_field(
                OutputField::new("distance_to_closest", ValueType::Number)
                    .with_description("Euclidean distance to the closest grid point."),
            )
            .build()
    }

    /// Registers the tool with the provided registry.
    ///
    /// # Errors
    ///
    /// Propagates definition and duplicate-registration errors.
    pub fn register(self, registry: &ToolRegistry) -> ToolResult<()> {
        let definition = self.definition()?;
        registry.register_tool(definition, self)
    }
}

#[async_trait]
impl Tool for NearestPointTool {
    async fn invoke(&self, params: Map<String, Value>) -> ToolResult<Value> {
        let x = integer_param(&params, self.naming.x())?;
        let y = integer_param(&params, self.naming.y())?;

        let hit = self
            .index
            .nearest(x, y)
            .map_err(|err| ToolError::execution(err.to_string()))?;

        serde_json::to_value(ClosestPointReply::from(hit))
            .map_err(|err| ToolError::execution(err.to_string()))
    }
}

fn integer_param(params: &Map<String, Value>, name: &str) -> ToolResult<i64> {
    params
        .get(name)
        .and_then(Value::as_i64)
        .ok_or_else(|| ToolError::execution(format!("parameter `{name}` missing after validation")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_primitives::{Catalog, Point};
    use serde_json::json;

    fn index() -> Arc<PointIndex> {
        let catalog = Catalog::new(vec![
            Point::new("Grand Hotel", 80, 15).unwrap(),
            Point::new("Airport Inn", 60, 30).unwrap(),
        ])
        .unwrap();
        Arc::new(PointIndex::new(catalog))
    }

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn resolves_closest_point() {
        let registry = ToolRegistry::new();
        NearestPointTool::new(index()).register(&registry).unwrap();

        let output = registry
            .invoke(FIND_CLOSEST_TOOL, as_map(json!({ "x": 80, "y": 15 })))
            .await
            .unwrap();

        let reply: ClosestPointReply = serde_json::from_value(output).unwrap();
        assert_eq!(reply.closest_point_id, "Grand Hotel");
        assert_eq!(reply.closest_x, 80);
        assert_eq!(reply.closest_y, 15);
        assert_eq!(reply.distance_to_closest, 0.0);
    }

    #[tokio::test]
    async fn verbose_naming_flows_into_validation_and_manifest() {
        let registry = ToolRegistry::new();
        NearestPointTool::with_naming(index(), CoordinateNaming::verbose())
            .register(&registry)
            .unwrap();

        // The plain names must no longer be accepted.
        let err = registry
            .invoke(FIND_CLOSEST_TOOL, as_map(json!({ "x": 1, "y": 2 })))
            .await
            .expect_err("plain names should fail under verbose naming");
        assert!(matches!(err, ToolError::Validation { .. }));

        let output = registry
            .invoke(
                FIND_CLOSEST_TOOL,
                as_map(json!({ "x_coordinate": 61, "y_coordinate": 30 })),
            )
            .await
            .unwrap();
        let reply: ClosestPointReply = serde_json::from_value(output).unwrap();
        assert_eq!(reply.closest_point_id, "Airport Inn");
        assert_eq!(reply.distance_to_closest, 1.0);

        let manifest = registry.manifest();
        let definition = manifest.get(FIND_CLOSEST_TOOL).unwrap();
        let names: Vec<_> = definition
            .parameters()
            .iter()
            .map(ParamSpec::name)
            .collect();
        assert_eq!(names, ["x_coordinate", "y_coordinate"]);
    }

    #[tokio::test]
    async fn out_of_range_coordinate_is_rejected_at_the_boundary() {
        let registry = ToolRegistry::new();
        NearestPointTool::new(index()).register(&registry).unwrap();

        let err = registry
            .invoke(FIND_CLOSEST_TOOL, as_map(json!({ "x": 150, "y": 10 })))
            .await
            .expect_err("x=150 should fail validation");

        assert!(matches!(
            err,
            ToolError::Validation { reason }
                if reason.contains("`x` value 150 is outside the range 0..=99")
        ));
    }

    #[tokio::test]
    async fn empty_catalog_surfaces_as_execution_error() {
        let registry = ToolRegistry::new();
        let empty = Arc::new(PointIndex::new(Catalog::new(Vec::new()).unwrap()));
        NearestPointTool::new(empty).register(&registry).unwrap();

        let err = registry
            .invoke(FIND_CLOSEST_TOOL, as_map(json!({ "x": 1, "y": 2 })))
            .await
            .expect_err("empty catalog should fail");

        assert!(matches!(
            err,
            ToolError::Execution { reason } if reason.contains("no points")
        ));
    }

    #[test]
    fn rejects_empty_custom_naming() {
        let err = CoordinateNaming::new("", "y").expect_err("empty x name should fail");
        assert!(matches!(err, ToolError::InvalidDefinition { .. }));
    }
}
