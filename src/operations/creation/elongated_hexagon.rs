use super::tan_30;
use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::Point2;

/// Extra length added when an over-short spoke is auto-corrected.
const AUTO_CORRECT_MARGIN: f64 = 0.1;

/// Creates a hexagon elongated along +x: a bar with 30° pointed ends.
///
/// The left tip sits at `start`, the right tip at `start + (length, 0)`.
/// Each end is inset by `tan(30°) · thickness / 2`, so `length` must
/// exceed twice that inset.
#[derive(Debug)]
pub struct ElongatedHexagon {
    start: Point2,
    length: f64,
    thickness: f64,
    auto_correct: bool,
}

impl ElongatedHexagon {
    /// Creates a new `ElongatedHexagon` operation.
    #[must_use]
    pub fn new(start: Point2, length: f64, thickness: f64) -> Self {
        Self {
            start,
            length,
            thickness,
            auto_correct: false,
        }
    }

    /// When set, an over-short length is raised to the minimum valid value
    /// instead of failing.
    #[must_use]
    pub fn auto_correct(mut self, enabled: bool) -> Self {
        self.auto_correct = enabled;
        self
    }

    /// Distance from each tip to the start of the straight sides.
    #[must_use]
    pub fn inset(&self) -> f64 {
        tan_30() * self.thickness * 0.5
    }

    /// Executes the operation, producing a counter-clockwise ring.
    ///
    /// # Errors
    ///
    /// - `GeometryError::Degenerate` if `thickness` is not positive
    /// - `GeometryError::InvalidPrimitive` if `length <= 2 * inset` and
    ///   auto-correct is off
    pub fn execute(&self) -> Result<Polygon> {
        if self.thickness <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "elongated hexagon thickness {} must be positive",
                self.thickness
            ))
            .into());
        }

        let inset = self.inset();
        let mut length = self.length;
        if length <= inset * 2.0 {
            if !self.auto_correct {
                return Err(GeometryError::InvalidPrimitive { length, inset }.into());
            }
            length = inset * 2.0 + AUTO_CORRECT_MARGIN;
        }

        let (x, y) = (self.start.x, self.start.y);
        let half = self.thickness / 2.0;
        Polygon::new(vec![
            Point2::new(x, y),
            Point2::new(x + inset, y - half),
            Point2::new(x + length - inset, y - half),
            Point2::new(x + length, y),
            Point2::new(x + length - inset, y + half),
            Point2::new(x + inset, y + half),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::SnowflakeError;

    #[test]
    fn spans_start_to_length() {
        let hex = ElongatedHexagon::new(Point2::new(20.0, 3.0), 5.0, 2.0)
            .execute()
            .unwrap();
        let ring = hex.exterior();
        assert_eq!(ring.len(), 6);
        assert_relative_eq!(ring[0].x, 20.0);
        assert_relative_eq!(ring[3].x, 25.0);
        assert_relative_eq!(ring[1].y, 2.0);
        assert_relative_eq!(ring[4].y, 4.0);
        assert!(hex.signed_area() > 0.0);
    }

    #[test]
    fn area_is_bar_minus_corner_triangles() {
        let hex = ElongatedHexagon::new(Point2::origin(), 5.0, 2.0)
            .execute()
            .unwrap();
        let inset = tan_30();
        // Full bar minus four right triangles with legs `inset` and 1.
        assert_relative_eq!(hex.area(), 5.0 * 2.0 - 2.0 * inset, epsilon = 1e-12);
    }

    #[test]
    fn too_short_without_auto_correct_fails() {
        let err = ElongatedHexagon::new(Point2::origin(), 1.0, 4.0)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            SnowflakeError::Geometry(GeometryError::InvalidPrimitive { .. })
        ));
    }

    #[test]
    fn too_short_with_auto_correct_is_lengthened() {
        let op = ElongatedHexagon::new(Point2::origin(), 1.0, 4.0).auto_correct(true);
        let inset = op.inset();
        let hex = op.execute().unwrap();
        assert_relative_eq!(
            hex.exterior()[3].x,
            inset * 2.0 + AUTO_CORRECT_MARGIN,
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_thickness_fails() {
        assert!(ElongatedHexagon::new(Point2::origin(), 5.0, 0.0)
            .execute()
            .is_err());
    }
}
