//! Conversions between this crate's geometry and the `geo` crate.

use geo::{Coord, LineString as GeoLineString};

use super::{LineString, MultiPolygon, Polygon};
use crate::math::Point2;

fn to_geo_ring(points: &[Point2]) -> GeoLineString<f64> {
    // `geo::Polygon::new` closes the ring.
    GeoLineString::new(points.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
}

fn from_geo_ring(ring: &GeoLineString<f64>) -> Vec<Point2> {
    ring.coords().map(|c| Point2::new(c.x, c.y)).collect()
}

impl From<&Polygon> for geo::Polygon<f64> {
    fn from(p: &Polygon) -> Self {
        geo::Polygon::new(
            to_geo_ring(p.exterior()),
            p.interiors().iter().map(|r| to_geo_ring(r)).collect(),
        )
    }
}

impl From<&MultiPolygon> for geo::MultiPolygon<f64> {
    fn from(mp: &MultiPolygon) -> Self {
        geo::MultiPolygon::new(mp.0.iter().map(geo::Polygon::from).collect())
    }
}

impl From<&LineString> for GeoLineString<f64> {
    fn from(ls: &LineString) -> Self {
        to_geo_ring(&ls.0)
    }
}

/// Converts a `geo` polygon, returning `None` if its exterior has collapsed.
#[must_use]
pub fn polygon_from_geo(p: &geo::Polygon<f64>) -> Option<Polygon> {
    Polygon::with_interiors(
        from_geo_ring(p.exterior()),
        p.interiors().iter().map(from_geo_ring).collect(),
    )
    .ok()
}

/// Converts a `geo` multi-polygon, dropping collapsed members.
#[must_use]
pub fn multi_polygon_from_geo(mp: &geo::MultiPolygon<f64>) -> MultiPolygon {
    MultiPolygon(mp.iter().filter_map(polygon_from_geo).collect())
}

/// Converts a point to a `geo` point.
#[must_use]
pub fn to_geo_point(p: &Point2) -> geo::Point<f64> {
    geo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn polygon_survives_geo_conversion() {
        let p = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 3.0),
        ])
        .unwrap();
        let g = geo::Polygon::from(&p);
        // geo stores the closing coordinate explicitly.
        assert_eq!(g.exterior().0.len(), 4);
        let back = polygon_from_geo(&g).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn collapsed_members_are_dropped() {
        let empty = geo::Polygon::new(GeoLineString::new(vec![]), vec![]);
        let mp = multi_polygon_from_geo(&geo::MultiPolygon::new(vec![empty]));
        assert!(mp.0.is_empty());
    }
}
