use tracing::warn;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::angle::{calculate_angle, AngleRange};
use crate::math::{polar_offset, Point2};

/// Below this `|sin(θ/2)|` the miter length is treated as undefined.
const DEGENERATE_SIN: f64 = 1e-9;

/// Offsets a polygon ring by moving each vertex along its angle bisector.
///
/// This is a local, O(n) miter: one output vertex per input vertex, no
/// self-intersection detection or repair. Concave vertices and large
/// distances relative to local feature size can fold the ring over itself.
///
/// # Sign Convention
///
/// The ring is walked counter-clockwise, so negative distances inset and
/// positive distances outset. Holes are not offset and are dropped.
///
/// # Degenerate Vertices
///
/// When a vertex's interior angle is (near) zero, the miter length
/// `distance / sin(θ/2)` is undefined. Such a vertex is logged and kept
/// where it is; the rest of the ring is still offset.
#[derive(Debug)]
pub struct MiterOffset {
    polygon: Polygon,
    distance: f64,
}

impl MiterOffset {
    /// Creates a new miter offset operation.
    #[must_use]
    pub fn new(polygon: Polygon, distance: f64) -> Self {
        Self { polygon, distance }
    }

    /// Executes the offset, returning a counter-clockwise ring with the
    /// same number of vertices as the input exterior.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output ring cannot form a polygon, which
    /// cannot happen for a valid input.
    pub fn execute(&self) -> Result<Polygon> {
        let ring = self.polygon.to_ccw();
        let ring = ring.exterior();
        let n = ring.len();

        let offset: Vec<Point2> = (0..n)
            .map(|i| {
                let prev = &ring[(i + n - 1) % n];
                let cur = &ring[i];
                let next = &ring[(i + 1) % n];
                self.offset_vertex(prev, cur, next).unwrap_or_else(|| {
                    warn!(
                        x = cur.x,
                        y = cur.y,
                        distance = self.distance,
                        "degenerate miter vertex, keeping original position"
                    );
                    *cur
                })
            })
            .collect();

        Polygon::new(offset)
    }

    /// Miter position for `cur`, or `None` when the bisector is undefined.
    fn offset_vertex(&self, prev: &Point2, cur: &Point2, next: &Point2) -> Option<Point2> {
        let theta = calculate_angle(prev, cur, next, AngleRange::Full);
        let half = theta / 2.0;
        let sin_half = half.to_radians().sin();
        if sin_half.abs() < DEGENERATE_SIN {
            return None;
        }
        let magnitude = self.distance / sin_half;
        // The bisector is measured from the edge back towards `prev`.
        let reference = (prev.y - cur.y).atan2(prev.x - cur.x).to_degrees();
        let moved = polar_offset(cur, reference + half, magnitude);
        (moved.x.is_finite() && moved.y.is_finite()).then_some(moved)
    }
}
