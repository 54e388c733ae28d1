use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, LineString, MultiLineString, MultiPolygon, Polygon};
use crate::math::polygon_2d::bounds_center;
use crate::math::{Point2, TOLERANCE};

/// Virtual camera distance used when none is given.
pub const DEFAULT_CAMERA_DISTANCE: f64 = 15.0;

/// Fake single-axis perspective: tilts a shape about its vertical centre line.
///
/// For each vertex relative to the bounding-box centre, `z = rel_x · sin(angle)`
/// and `scale = distance / (distance + z)`; the vertex moves to
/// `centre + (rel_x · cos(angle) · scale, rel_y · scale)`.
#[derive(Debug)]
pub struct Perspective {
    geometry: Geometry,
    angle_degrees: f64,
    distance: f64,
}

impl Perspective {
    /// Creates a new projection tilting `geometry` by `angle_degrees`.
    #[must_use]
    pub fn new(geometry: Geometry, angle_degrees: f64) -> Self {
        Self {
            geometry,
            angle_degrees,
            distance: DEFAULT_CAMERA_DISTANCE,
        }
    }

    /// Sets the virtual camera distance.
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Executes the projection.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateProjection` if any vertex lands on
    /// the camera plane (`distance + z == 0`); the whole projection is
    /// rejected rather than emitting non-finite coordinates.
    pub fn execute(&self) -> Result<Geometry> {
        let points = collect_points(&self.geometry);
        let Some(center) = bounds_center(&points) else {
            return Ok(self.geometry.clone());
        };

        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        for p in &points {
            let z = (p.x - center.x) * sin;
            if (self.distance + z).abs() < TOLERANCE {
                return Err(GeometryError::DegenerateProjection {
                    x: p.x,
                    y: p.y,
                    distance: self.distance,
                    z,
                }
                .into());
            }
        }

        let distance = self.distance;
        Ok(self.geometry.map_points(|p| {
            let rel_x = p.x - center.x;
            let rel_y = p.y - center.y;
            let scale = distance / (distance + rel_x * sin);
            Point2::new(center.x + rel_x * cos * scale, center.y + rel_y * scale)
        }))
    }
}

fn collect_points(geometry: &Geometry) -> Vec<Point2> {
    fn polygon_points(p: &Polygon, out: &mut Vec<Point2>) {
        out.extend_from_slice(p.exterior());
        for ring in p.interiors() {
            out.extend_from_slice(ring);
        }
    }

    let mut out = Vec::new();
    match geometry {
        Geometry::Polygon(p) => polygon_points(p, &mut out),
        Geometry::MultiPolygon(MultiPolygon(members)) => {
            for p in members {
                polygon_points(p, &mut out);
            }
        }
        Geometry::LineString(LineString(points)) => out.extend_from_slice(points),
        Geometry::MultiLineString(MultiLineString(lines)) => {
            for line in lines {
                out.extend_from_slice(&line.0);
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::SnowflakeError;
    use crate::operations::creation::Hexagon;

    fn square() -> Geometry {
        Polygon::new(vec![
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
        ])
        .unwrap()
        .into()
    }

    fn ring(g: &Geometry) -> Vec<Point2> {
        match g {
            Geometry::Polygon(p) => p.exterior().to_vec(),
            other => panic!("unexpected {}", other.kind()),
        }
    }

    #[test]
    fn zero_angle_is_identity() {
        let out = Perspective::new(square(), 0.0).execute().unwrap();
        assert_eq!(ring(&out), ring(&square()));
    }

    #[test]
    fn tilt_foreshortens_far_side() {
        let out = Perspective::new(square(), 30.0)
            .with_distance(10.0)
            .execute()
            .unwrap();
        let pts = ring(&out);
        // Right edge recedes (z > 0), so it shrinks vertically; left edge grows.
        let right_height = pts[2].y - pts[1].y;
        let left_height = pts[3].y - pts[0].y;
        assert!(right_height < 2.0);
        assert!(left_height > 2.0);
        let expected_scale = 10.0 / (10.0 + 0.5);
        assert_abs_diff_eq!(pts[1].x, 30.0_f64.to_radians().cos() * expected_scale, epsilon = 1e-12);
    }

    #[test]
    fn camera_plane_vertex_is_rejected() {
        // rel_x = -2 at sin(90°) = 1 puts the left vertex on the camera plane.
        let hex = Hexagon::new(Point2::origin(), 2.0).execute().unwrap();
        let err = Perspective::new(hex.into(), 90.0)
            .with_distance(2.0)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            SnowflakeError::Geometry(GeometryError::DegenerateProjection { .. })
        ));
    }

    #[test]
    fn projects_line_strings() {
        let line: Geometry = LineString::segment(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)).into();
        let out = Perspective::new(line, 60.0).execute().unwrap();
        let Geometry::LineString(ls) = out else {
            panic!("expected line string");
        };
        assert!(ls.length() < 4.0);
    }
}
