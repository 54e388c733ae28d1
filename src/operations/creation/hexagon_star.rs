use super::{tan_30, ElongatedHexagon};
use crate::error::{OperationError, Result};
use crate::geometry::{MultiPolygon, Polygon};
use crate::math::Point2;
use crate::operations::boolean::Union;

/// Builds the six elongated-hexagon spokes of a star, rotated 60° apart.
pub(crate) fn spokes(
    center: Point2,
    offset: f64,
    length: f64,
    thickness: f64,
    rotation: f64,
) -> Result<Vec<Polygon>> {
    let spoke = ElongatedHexagon::new(Point2::new(center.x + offset, center.y), length, thickness)
        .execute()?;
    Ok((0..6)
        .map(|i| spoke.rotated(&center, f64::from(i) * 60.0 + rotation))
        .collect())
}

/// Creates a six-pointed star: the union of six elongated hexagons
/// radiating from a shared centre.
#[derive(Debug)]
pub struct HexagonStar {
    center: Point2,
    radius: f64,
    thickness: f64,
    rotation: f64,
}

impl HexagonStar {
    /// Creates a new `HexagonStar` operation; `radius` is the spoke length.
    #[must_use]
    pub fn new(center: Point2, radius: f64, thickness: f64) -> Self {
        Self {
            center,
            radius,
            thickness,
            rotation: 0.0,
        }
    }

    /// Rotates every spoke by `degrees` about the centre.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a spoke is not a valid elongated hexagon.
    pub fn execute(&self) -> Result<MultiPolygon> {
        let spokes = spokes(self.center, 0.0, self.radius, self.thickness, self.rotation)?;
        Ok(Union::new(spokes).execute())
    }
}

/// Fills a hexagon star by nesting ever thinner copies of it.
///
/// Each step reduces the thickness by two pen widths and pulls the tips in
/// by the matching `offset · tan(30°)`, until the thickness is used up.
#[derive(Debug)]
pub struct FilledHexagonStar {
    center: Point2,
    radius: f64,
    thickness: f64,
    pen_width: f64,
}

impl FilledHexagonStar {
    /// Creates a new `FilledHexagonStar` operation.
    #[must_use]
    pub fn new(center: Point2, radius: f64, thickness: f64, pen_width: f64) -> Self {
        Self {
            center,
            radius,
            thickness,
            pen_width,
        }
    }

    /// Executes the operation, returning the outline followed by each nested star.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if `pen_width` is not positive
    /// - any error from building the nested stars
    pub fn execute(&self) -> Result<MultiPolygon> {
        if self.pen_width <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "pen width {} must be positive",
                self.pen_width
            ))
            .into());
        }

        let mut polygons = HexagonStar::new(self.center, self.radius, self.thickness)
            .execute()?
            .0;
        let mut offset = 0.0;
        loop {
            offset -= self.pen_width * 2.0;
            let thickness = self.thickness + offset;
            if thickness <= 0.0 {
                break;
            }
            let radius = self.radius + offset * tan_30();
            polygons.extend(HexagonStar::new(self.center, radius, thickness).execute()?.0);
        }
        Ok(MultiPolygon(polygons))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Every vertex of `a` has a counterpart in `b` within `tol`.
    fn same_vertices(a: &MultiPolygon, b: &MultiPolygon, tol: f64) -> bool {
        let bv: Vec<Point2> = b.0.iter().flat_map(|p| p.exterior().to_vec()).collect();
        a.0.iter()
            .flat_map(|p| p.exterior().iter())
            .all(|p| bv.iter().any(|q| nalgebra::distance(p, q) < tol))
    }

    #[test]
    fn star_is_single_connected_polygon() {
        let star = HexagonStar::new(Point2::new(10.0, 13.0), 5.0, 1.0)
            .execute()
            .unwrap();
        assert_eq!(star.0.len(), 1);
        // Six spokes overlap only near the centre.
        let spoke = ElongatedHexagon::new(Point2::origin(), 5.0, 1.0)
            .execute()
            .unwrap();
        assert!(star.area() < spoke.area() * 6.0);
        assert!(star.area() > spoke.area() * 5.0);
    }

    #[test]
    fn sixty_degree_rotation_is_invariant() {
        let center = Point2::new(3.0, -2.0);
        for base in [0.0, 17.0] {
            let a = HexagonStar::new(center, 4.0, 0.8)
                .with_rotation(base)
                .execute()
                .unwrap();
            let b = HexagonStar::new(center, 4.0, 0.8)
                .with_rotation(base + 60.0)
                .execute()
                .unwrap();
            // The boolean union perturbs vertices by ~1e-8.
            assert!((a.area() - b.area()).abs() < 1e-6);
            assert!(same_vertices(&a, &b, 1e-6));
            assert!(same_vertices(&b, &a, 1e-6));
            // Rotating the output reproduces the shape too.
            assert!(same_vertices(&a.rotated(&center, 60.0), &a, 1e-6));
        }
    }

    #[test]
    fn filled_star_nests_until_thickness_is_used() {
        let filled = FilledHexagonStar::new(Point2::origin(), 5.0, 1.0, 0.2)
            .execute()
            .unwrap();
        // Thickness 1.0 → 0.6 → 0.2 → stop.
        assert_eq!(filled.0.len(), 3);
        let areas: Vec<f64> = filled.0.iter().map(Polygon::area).collect();
        assert!(areas.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn filled_star_rejects_zero_pen() {
        assert!(FilledHexagonStar::new(Point2::origin(), 5.0, 1.0, 0.0)
            .execute()
            .is_err());
    }
}
