pub mod convert;
pub mod line_string;
pub mod polygon;

pub use line_string::{LineString, MultiLineString};
pub use polygon::{MultiPolygon, Polygon};

use crate::math::Point2;

/// Tagged union of the vector geometry produced by every generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    LineString(LineString),
    MultiLineString(MultiLineString),
}

impl Geometry {
    /// Returns a copy with every vertex mapped through `f`.
    #[must_use]
    pub fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(&Point2) -> Point2,
    {
        match self {
            Self::Polygon(p) => Self::Polygon(p.map_points(&f)),
            Self::MultiPolygon(mp) => Self::MultiPolygon(mp.map_points(&f)),
            Self::LineString(ls) => Self::LineString(ls.map_points(&f)),
            Self::MultiLineString(mls) => Self::MultiLineString(mls.map_points(&f)),
        }
    }

    /// Rotates the geometry about `origin` by `degrees` (counter-clockwise).
    #[must_use]
    pub fn rotated(&self, origin: &Point2, degrees: f64) -> Self {
        self.map_points(|p| crate::math::rotate_about(p, origin, degrees))
    }

    /// Returns `true` when the geometry has no drawable content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Polygon(_) => false,
            Self::MultiPolygon(mp) => mp.0.is_empty(),
            Self::LineString(ls) => ls.0.len() < 2,
            Self::MultiLineString(mls) => mls.0.iter().all(|ls| ls.0.len() < 2),
        }
    }

    /// Short variant name, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Polygon(_) => "polygon",
            Self::MultiPolygon(_) => "multipolygon",
            Self::LineString(_) => "linestring",
            Self::MultiLineString(_) => "multilinestring",
        }
    }
}

impl From<Polygon> for Geometry {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}

impl From<MultiPolygon> for Geometry {
    /// A single-member multi-polygon collapses to a plain polygon.
    fn from(mut mp: MultiPolygon) -> Self {
        if mp.0.len() == 1 {
            if let Some(p) = mp.0.pop() {
                return Self::Polygon(p);
            }
        }
        Self::MultiPolygon(mp)
    }
}

impl From<LineString> for Geometry {
    fn from(ls: LineString) -> Self {
        Self::LineString(ls)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(mls: MultiLineString) -> Self {
        Self::MultiLineString(mls)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn triangle() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn single_member_multipolygon_collapses() {
        let g = Geometry::from(MultiPolygon(vec![triangle()]));
        assert!(matches!(g, Geometry::Polygon(_)));
        let g = Geometry::from(MultiPolygon(vec![triangle(), triangle()]));
        assert!(matches!(g, Geometry::MultiPolygon(_)));
    }

    #[test]
    fn rotated_polygon_moves_vertices() {
        let g = Geometry::from(triangle()).rotated(&Point2::origin(), 180.0);
        let Geometry::Polygon(p) = g else {
            panic!("expected polygon");
        };
        assert_abs_diff_eq!(p.exterior()[1].x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.exterior()[2].y, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn emptiness_by_variant() {
        assert!(Geometry::from(MultiPolygon(vec![])).is_empty());
        assert!(Geometry::from(LineString(vec![Point2::origin()])).is_empty());
        assert!(!Geometry::from(triangle()).is_empty());
    }
}
