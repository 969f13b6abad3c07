//! Grid point types and coordinate bounds.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest legal coordinate value on either axis.
pub const GRID_MIN: i64 = 0;
/// Largest legal coordinate value on either axis.
pub const GRID_MAX: i64 = 99;

/// Identifier naming a point within a catalog.
///
/// Both opaque codes (`"G01"`) and human-readable names (`"Grand Hotel"`)
/// are legal; the id format is a catalog concern, not a logic path.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct PointId(String);

impl PointId {
    /// Creates a new point identifier after validating it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPointId`] when the identifier is empty or
    /// consists only of whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidPointId {
                reason: "identifier cannot be empty".into(),
            });
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PointId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<PointId> for String {
    fn from(value: PointId) -> Self {
        value.0
    }
}

impl TryFrom<String> for PointId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

/// A named, immutable point on the grid.
///
/// Constructed once when a catalog is assembled and never mutated afterward.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    id: PointId,
    x: i64,
    y: i64,
}

impl Point {
    /// Creates a point after validating its identifier and coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPointId`] for an empty identifier, or
    /// [`Error::InvalidCoordinate`] for a coordinate outside
    /// [`GRID_MIN`]`..=`[`GRID_MAX`].
    pub fn new(id: impl Into<String>, x: i64, y: i64) -> Result<Self> {
        let id = PointId::new(id)?;
        validate_coordinate("x", x)?;
        validate_coordinate("y", y)?;
        Ok(Self { id, x, y })
    }

    /// Returns the point identifier.
    #[must_use]
    pub fn id(&self) -> &PointId {
        &self.id
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }
}

fn validate_coordinate(axis: &'static str, value: i64) -> Result<()> {
    if !(GRID_MIN..=GRID_MAX).contains(&value) {
        return Err(Error::InvalidCoordinate { axis, value });
    }
    Ok(())
}

/// Unvalidated wire shape backing `Point` deserialization.
#[derive(Deserialize)]
struct RawPoint {
    id: String,
    x: i64,
    y: i64,
}

impl TryFrom<RawPoint> for Point {
    type Error = Error;

    fn try_from(value: RawPoint) -> Result<Self> {
        Self::new(value.id, value.x, value.y)
    }
}
