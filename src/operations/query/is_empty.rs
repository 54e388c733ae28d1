use crate::geometry::Polygon;
use crate::math::TOLERANCE;

/// Reports whether a ring has collapsed to nothing.
///
/// A ring is empty when its signed area is not positive. Measured against
/// a reference ring with the same vertex count (the source of an offset),
/// it is also empty as soon as any edge points against its source edge,
/// which is how an inset ring looks once it has passed through itself.
#[derive(Debug)]
pub struct IsEmpty<'a> {
    ring: &'a Polygon,
    reference: Option<&'a Polygon>,
}

impl<'a> IsEmpty<'a> {
    /// Creates a new `IsEmpty` query.
    #[must_use]
    pub fn new(ring: &'a Polygon) -> Self {
        Self {
            ring,
            reference: None,
        }
    }

    /// Also compares edge directions against `reference`.
    #[must_use]
    pub fn relative_to(mut self, reference: &'a Polygon) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let ring = self.ring.exterior();
        if ring.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return true;
        }
        if self.ring.signed_area() <= TOLERANCE {
            return true;
        }
        let Some(reference) = self.reference else {
            return false;
        };
        let source = reference.exterior();
        if source.len() != ring.len() {
            return false;
        }
        let n = ring.len();
        (0..n).any(|i| {
            let edge = ring[(i + 1) % n] - ring[i];
            let original = source[(i + 1) % n] - source[i];
            edge.dot(&original) < 0.0
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::creation::Hexagon;

    #[test]
    fn ccw_ring_is_not_empty() {
        let hex = Hexagon::new(Point2::origin(), 1.0).execute().unwrap();
        assert!(!IsEmpty::new(&hex).execute());
        assert!(!IsEmpty::new(&hex).relative_to(&hex).execute());
    }

    #[test]
    fn clockwise_ring_is_empty() {
        let mut ring = Hexagon::new(Point2::origin(), 1.0)
            .execute()
            .unwrap()
            .exterior()
            .to_vec();
        ring.reverse();
        let cw = Polygon::new(ring).unwrap();
        assert!(IsEmpty::new(&cw).execute());
    }

    #[test]
    fn point_reflected_ring_is_empty_relative_to_source() {
        let hex = Hexagon::new(Point2::origin(), 1.0).execute().unwrap();
        let flipped = hex.map_points(|p| Point2::new(-p.x * 0.1, -p.y * 0.1));
        // Still counter-clockwise, but every edge points backwards.
        assert!(!IsEmpty::new(&flipped).execute());
        assert!(IsEmpty::new(&flipped).relative_to(&hex).execute());
    }
}
