//! Exhaustive-scan nearest-neighbor index.

use grid_primitives::{Catalog, Error, NearestMatch, Result};
use tracing::trace;

/// Answers "which catalog point is closest to `(x, y)`?" by linear scan.
///
/// The catalog is taken by value at construction and never mutated, so
/// queries are pure reads and need no synchronization.
#[derive(Debug, Clone)]
pub struct PointIndex {
    catalog: Catalog,
}

impl PointIndex {
    /// Creates an index over the supplied catalog.
    ///
    /// An empty catalog is accepted here; queries against it fail with
    /// [`Error::EmptyCatalog`].
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the indexed catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the catalog point closest to `(x, y)` by Euclidean distance.
    ///
    /// Ties resolve to the point appearing first in catalog order: the scan
    /// compares with strict `<` against the running minimum, so a later
    /// equidistant point never displaces an earlier one. Coordinate range
    /// checks are a boundary concern; any integer input is accepted here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] when the catalog has no points.
    pub fn nearest(&self, x: i64, y: i64) -> Result<NearestMatch> {
        let mut winner: Option<NearestMatch> = None;

        for point in self.catalog.points() {
            let distance = euclidean(x, y, point.x(), point.y());
            let closer = winner
                .as_ref()
                .is_none_or(|current| distance < current.distance());
            if closer {
                winner = Some(NearestMatch::new(point, distance));
            }
        }

        let winner = winner.ok_or(Error::EmptyCatalog)?;
        trace!(x, y, winner = %winner.id(), distance = winner.distance(), "nearest point resolved");
        Ok(winner)
    }
}

#[allow(clippy::cast_precision_loss)]
fn euclidean(x1: i64, y1: i64, x2: i64, y2: i64) -> f64 {
    let dx = (x1 - x2) as f64;
    let dy = (y1 - y2) as f64;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_primitives::{Catalog, Point};

    fn sample_catalog() -> Catalog {
        let raw = [
            ("Youth Hostel", 10, 20),
            ("Sky High Hotel", 50, 75),
            ("Welcome Inn", 5, 90),
            ("Hostel Attitude", 95, 5),
            ("Apartment4Rent", 40, 40),
            ("Grand Hotel", 80, 15),
            ("Cheap Cheap Rooms", 15, 85),
            ("Airport Inn", 60, 30),
            ("Extended Stay Suites", 25, 55),
            ("Super Hospitality Hotel", 70, 90),
        ];
        Catalog::new(
            raw.into_iter()
                .map(|(id, x, y)| Point::new(id, x, y).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn exact_hit_has_zero_distance() {
        let index = PointIndex::new(sample_catalog());
        for point in index.catalog().points() {
            let hit = index.nearest(point.x(), point.y()).unwrap();
            assert_eq!(hit.id(), point.id());
            assert_eq!(hit.distance(), 0.0);
        }
    }

    #[test]
    fn matches_brute_force_minimum() {
        let index = PointIndex::new(sample_catalog());
        for (x, y) in [(0, 0), (99, 99), (33, 66), (80, 16), (47, 52)] {
            let hit = index.nearest(x, y).unwrap();
            let minimum = index
                .catalog()
                .points()
                .iter()
                .map(|p| euclidean(x, y, p.x(), p.y()))
                .fold(f64::INFINITY, f64::min);
            assert_eq!(hit.distance(), minimum);
        }
    }

    #[test]
    fn tie_breaks_to_first_in_catalog_order() {
        let catalog = Catalog::new(vec![
            Point::new("A", 0, 0).unwrap(),
            Point::new("B", 10, 0).unwrap(),
        ])
        .unwrap();
        let index = PointIndex::new(catalog);

        let hit = index.nearest(4, 0).unwrap();
        assert_eq!(hit.id().as_str(), "A");
        assert_eq!(hit.distance(), 4.0);

        // Equidistant from both endpoints; A is first and must keep winning.
        for _ in 0..10 {
            let hit = index.nearest(5, 0).unwrap();
            assert_eq!(hit.id().as_str(), "A");
            assert_eq!(hit.distance(), 5.0);
        }
    }

    #[test]
    fn empty_catalog_always_errors() {
        let index = PointIndex::new(Catalog::new(Vec::new()).unwrap());
        let err = index.nearest(10, 10).expect_err("empty catalog must fail");
        assert_eq!(err, Error::EmptyCatalog);
    }

    #[test]
    fn grand_hotel_scenario() {
        let index = PointIndex::new(sample_catalog());
        let hit = index.nearest(80, 15).unwrap();
        assert_eq!(hit.id().as_str(), "Grand Hotel");
        assert_eq!(hit.x(), 80);
        assert_eq!(hit.y(), 15);
        assert_eq!(hit.distance(), 0.0);
    }
}
