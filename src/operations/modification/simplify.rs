use geo::Simplify as _;
use tracing::debug;

use crate::geometry::convert::polygon_from_geo;
use crate::geometry::Polygon;

/// Tolerance used before miter offsetting to drop near-collinear vertices.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.01;

/// Tolerance-based vertex reduction (Ramer–Douglas–Peucker).
#[derive(Debug)]
pub struct Simplify {
    polygon: Polygon,
    tolerance: f64,
}

impl Simplify {
    /// Creates a new simplification with the default tolerance.
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
        }
    }

    /// Sets the maximum perpendicular deviation of dropped vertices.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the simplification. If the ring would collapse, the input
    /// is returned unchanged.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        let simplified = geo::Polygon::from(&self.polygon).simplify(&self.tolerance);
        polygon_from_geo(&simplified).unwrap_or_else(|| {
            debug!(tolerance = self.tolerance, "simplification collapsed ring, keeping input");
            self.polygon.clone()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn drops_collinear_vertices() {
        let p = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.001),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
        .unwrap();
        let s = Simplify::new(p).execute();
        assert_eq!(s.exterior().len(), 4);
    }

    #[test]
    fn keeps_real_corners() {
        let p = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
        ])
        .unwrap();
        assert_eq!(Simplify::new(p).execute().exterior().len(), 3);
    }
}
