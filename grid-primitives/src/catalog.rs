//! Ordered catalogs of grid points.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::Point;

/// An ordered sequence of points, fixed once constructed.
///
/// Point ids must be unique within one catalog; the construction order is
/// preserved because it decides nearest-neighbor tie-breaks. An empty
/// catalog can be built; queries against it fail at query time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Catalog {
    points: Vec<Point>,
}

impl Catalog {
    /// Builds a catalog from the supplied points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePointId`] when two points share an id.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(point.id().as_str()) {
                return Err(Error::DuplicatePointId {
                    id: point.id().as_str().to_owned(),
                });
            }
        }
        Ok(Self { points })
    }

    /// Returns the points in catalog order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the point with the given id, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Point> {
        self.points.iter().find(|point| point.id().as_str() == id)
    }

    /// Returns the number of points in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the catalog holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<Point>> for Catalog {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Catalog> for Vec<Point> {
    fn from(value: Catalog) -> Self {
        value.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let catalog = Catalog::new(vec![
            Point::new("B", 10, 0).unwrap(),
            Point::new("A", 0, 0).unwrap(),
        ])
        .unwrap();

        let ids: Vec<_> = catalog
            .points()
            .iter()
            .map(|point| point.id().as_str())
            .collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            Point::new("A", 0, 0).unwrap(),
            Point::new("A", 10, 0).unwrap(),
        ])
        .expect_err("duplicate id should fail");

        assert_eq!(err, Error::DuplicatePointId { id: "A".into() });
    }

    #[test]
    fn allows_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn looks_up_points_by_id() {
        let catalog = Catalog::new(vec![Point::new("Grand Hotel", 80, 15).unwrap()]).unwrap();
        assert_eq!(catalog.get("Grand Hotel").unwrap().x(), 80);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn deserializes_from_json_configuration() {
        let catalog: Catalog = serde_json::from_str(
            r#"[{"id":"Youth Hostel","x":10,"y":20},{"id":"Sky High Hotel","x":50,"y":75}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);

        let err = serde_json::from_str::<Catalog>(
            r#"[{"id":"A","x":0,"y":0},{"id":"A","x":1,"y":1}]"#,
        )
        .expect_err("duplicate ids should fail");
        assert!(err.to_string().contains("more than once"));
    }
}
