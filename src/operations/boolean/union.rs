use geo::BooleanOps;

use crate::geometry::convert::multi_polygon_from_geo;
use crate::geometry::{MultiPolygon, Polygon};

/// Computes the boolean union of a set of polygons.
#[derive(Debug, Default)]
pub struct Union {
    operands: Vec<Polygon>,
}

impl Union {
    /// Creates a new `Union` operation over `operands`.
    #[must_use]
    pub fn new(operands: Vec<Polygon>) -> Self {
        Self { operands }
    }

    /// Adds every member of `mp` as an operand.
    #[must_use]
    pub fn with(mut self, mp: MultiPolygon) -> Self {
        self.operands.extend(mp.0);
        self
    }

    /// Executes the union. An empty operand list yields an empty result.
    #[must_use]
    pub fn execute(&self) -> MultiPolygon {
        let merged = self
            .operands
            .iter()
            .fold(geo::MultiPolygon::<f64>::new(Vec::new()), |acc, p| {
                acc.union(&geo::MultiPolygon::new(vec![geo::Polygon::from(p)]))
            });
        multi_polygon_from_geo(&merged)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::new(vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
        .unwrap()
    }

    #[test]
    fn overlapping_squares_merge() {
        let result = Union::new(vec![square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]).execute();
        assert_eq!(result.0.len(), 1);
        assert!((result.area() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_squares_stay_separate() {
        let result = Union::new(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]).execute();
        assert_eq!(result.0.len(), 2);
        assert!((result.area() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_union() {
        assert!(Union::default().execute().0.is_empty());
    }
}
