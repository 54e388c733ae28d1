use geo::Contains as _;

use crate::geometry::convert::to_geo_point;
use crate::geometry::{MultiPolygon, Polygon};
use crate::math::Point2;

/// Containment tests against a polygonal region.
///
/// Boundary points are not contained.
#[derive(Debug)]
pub struct Contains {
    region: geo::MultiPolygon<f64>,
}

impl Contains {
    /// Creates a containment query over `region`.
    #[must_use]
    pub fn new(region: &MultiPolygon) -> Self {
        Self {
            region: geo::MultiPolygon::from(region),
        }
    }

    /// Returns `true` if `point` lies strictly inside the region.
    #[must_use]
    pub fn point(&self, point: &Point2) -> bool {
        self.region.contains(&to_geo_point(point))
    }

    /// Returns `true` if `polygon` lies entirely inside the region.
    #[must_use]
    pub fn polygon(&self, polygon: &Polygon) -> bool {
        self.region.contains(&geo::Polygon::from(polygon))
    }
}
