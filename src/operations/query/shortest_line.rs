use crate::geometry::{LineString, Polygon};
use crate::math::distance_2d::closest_point_on_chain;
use crate::math::Point2;

/// Shortest segment from a point to a line string or polygon boundary.
#[derive(Debug)]
pub struct ShortestLine {
    from: Point2,
}

impl ShortestLine {
    /// Creates a query starting at `from`.
    #[must_use]
    pub fn new(from: Point2) -> Self {
        Self { from }
    }

    /// Shortest segment to `line`, or `None` if it has no points.
    #[must_use]
    pub fn to_line(&self, line: &LineString) -> Option<LineString> {
        closest_point_on_chain(&self.from, &line.0).map(|(q, _)| LineString::segment(self.from, q))
    }

    /// Shortest segment to the exterior ring of `polygon`.
    #[must_use]
    pub fn to_boundary(&self, polygon: &Polygon) -> Option<LineString> {
        let mut ring = polygon.exterior().to_vec();
        ring.push(ring[0]);
        self.to_line(&LineString(ring))
    }

    /// Distance to `line`, or `None` if it has no points.
    #[must_use]
    pub fn distance_to_line(&self, line: &LineString) -> Option<f64> {
        closest_point_on_chain(&self.from, &line.0).map(|(_, d)| d)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::operations::creation::Hexagon;

    #[test]
    fn to_vertical_fold_line() {
        let fold = LineString::segment(Point2::new(105.0, 0.0), Point2::new(105.0, 148.0));
        let q = ShortestLine::new(Point2::new(100.0, 50.0));
        let seg = q.to_line(&fold).unwrap();
        assert_abs_diff_eq!(seg.length(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(seg.0[1].y, 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.distance_to_line(&fold).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn to_hexagon_boundary_includes_closing_edge() {
        let hex = Hexagon::new(Point2::origin(), 2.0).execute().unwrap();
        // Nearest edge is the closing one, from the last vertex (300°) back to (2, 0).
        let seg = ShortestLine::new(Point2::new(3.0, -0.5))
            .to_boundary(&hex)
            .unwrap();
        assert!(seg.length() < 1.5);
    }

    #[test]
    fn empty_line_has_no_distance() {
        assert!(ShortestLine::new(Point2::origin())
            .to_line(&LineString::default())
            .is_none());
    }
}
