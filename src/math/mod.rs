pub mod angle;
pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Absolute tolerance used to merge near-coincident lattice points.
pub const LATTICE_TOLERANCE: f64 = 1e-5;

/// Rotates `point` about `origin` by `degrees` (counter-clockwise).
#[must_use]
pub fn rotate_about(point: &Point2, origin: &Point2, degrees: f64) -> Point2 {
    let (s, c) = degrees.to_radians().sin_cos();
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    Point2::new(origin.x + dx * c - dy * s, origin.y + dx * s + dy * c)
}

/// Returns the point `distance` away from `origin` in the direction `degrees`.
#[must_use]
pub fn polar_offset(origin: &Point2, degrees: f64, distance: f64) -> Point2 {
    let (s, c) = degrees.to_radians().sin_cos();
    Point2::new(origin.x + c * distance, origin.y + s * distance)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_about(&Point2::new(2.0, 1.0), &Point2::new(1.0, 1.0), 90.0);
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn polar_offset_sixty_degrees() {
        let p = polar_offset(&Point2::origin(), 60.0, 2.0);
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 3.0_f64.sqrt(), epsilon = 1e-12);
    }
}
