use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::{polar_offset, Point2, TOLERANCE};

/// Creates a regular hexagon with a vertex on the +x axis.
#[derive(Debug)]
pub struct Hexagon {
    center: Point2,
    radius: f64,
}

impl Hexagon {
    /// Creates a new `Hexagon` operation; `radius` is the centre-to-vertex distance.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `radius` is not positive.
    pub fn execute(&self) -> Result<Polygon> {
        if self.radius <= TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "hexagon radius {} must be positive",
                self.radius
            ))
            .into());
        }
        let points = (0..6)
            .map(|i| polar_offset(&self.center, f64::from(i) * 60.0, self.radius))
            .collect();
        Polygon::new(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn regular_hexagon_area() {
        let hex = Hexagon::new(Point2::new(3.0, 4.0), 2.0).execute().unwrap();
        assert_eq!(hex.exterior().len(), 6);
        // 3·√3/2·r²
        assert_relative_eq!(hex.area(), 1.5 * 3.0_f64.sqrt() * 4.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_radius_fails() {
        assert!(Hexagon::new(Point2::origin(), 0.0).execute().is_err());
    }
}
