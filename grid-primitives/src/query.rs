//! Nearest-neighbor query results.

use serde::Serialize;

use crate::point::{Point, PointId};

/// Result of a nearest-neighbor query: the winning point and its distance.
///
/// Recomputed on every query; never persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearestMatch {
    id: PointId,
    x: i64,
    y: i64,
    distance: f64,
}

impl NearestMatch {
    /// Creates a match for the given point and computed distance.
    #[must_use]
    pub fn new(point: &Point, distance: f64) -> Self {
        Self {
            id: point.id().clone(),
            x: point.x(),
            y: point.y(),
            distance,
        }
    }

    /// Returns the winning point's identifier.
    #[must_use]
    pub fn id(&self) -> &PointId {
        &self.id
    }

    /// Returns the winning point's x coordinate.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Returns the winning point's y coordinate.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Returns the Euclidean distance from the query to the winning point.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}
