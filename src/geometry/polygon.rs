use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{signed_area, strip_closing_point};
use crate::math::{rotate_about, Point2};

/// A closed ring with optional holes.
///
/// Rings are stored open: the closing vertex is implicit and a repeated
/// first point is dropped on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Vec<Point2>,
    interiors: Vec<Vec<Point2>>,
}

impl Polygon {
    /// Creates a polygon without holes.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if the ring has fewer than 3
    /// distinct vertices after closure normalization.
    pub fn new(exterior: Vec<Point2>) -> Result<Self> {
        Self::with_interiors(exterior, Vec::new())
    }

    /// Creates a polygon with holes. Holes with fewer than 3 vertices are dropped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if the exterior ring has fewer
    /// than 3 vertices.
    pub fn with_interiors(exterior: Vec<Point2>, interiors: Vec<Vec<Point2>>) -> Result<Self> {
        let exterior = strip_closing_point(&exterior);
        if exterior.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                expected: 3,
                actual: exterior.len(),
            }
            .into());
        }
        let interiors = interiors
            .iter()
            .map(|ring| strip_closing_point(ring))
            .filter(|ring| ring.len() >= 3)
            .collect();
        Ok(Self {
            exterior,
            interiors,
        })
    }

    /// The outer ring, without the closing vertex.
    #[must_use]
    pub fn exterior(&self) -> &[Point2] {
        &self.exterior
    }

    /// The hole rings, without closing vertices.
    #[must_use]
    pub fn interiors(&self) -> &[Vec<Point2>] {
        &self.interiors
    }

    /// Signed area of the exterior ring (positive when counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.exterior)
    }

    /// Enclosed area: exterior minus holes.
    #[must_use]
    pub fn area(&self) -> f64 {
        let holes: f64 = self.interiors.iter().map(|r| signed_area(r).abs()).sum();
        (self.signed_area().abs() - holes).max(0.0)
    }

    /// Returns a copy whose exterior runs counter-clockwise.
    #[must_use]
    pub fn to_ccw(&self) -> Self {
        if self.signed_area() >= 0.0 {
            return self.clone();
        }
        let mut exterior = self.exterior.clone();
        exterior.reverse();
        Self {
            exterior,
            interiors: self.interiors.clone(),
        }
    }

    /// Returns the exterior ring alone, dropping any holes.
    #[must_use]
    pub fn exterior_only(&self) -> Self {
        Self {
            exterior: self.exterior.clone(),
            interiors: Vec::new(),
        }
    }

    /// Rotates the polygon about `origin` by `degrees` (counter-clockwise).
    #[must_use]
    pub fn rotated(&self, origin: &Point2, degrees: f64) -> Self {
        self.map_points(|p| rotate_about(p, origin, degrees))
    }

    /// Returns a copy with every vertex mapped through `f`.
    #[must_use]
    pub fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(&Point2) -> Point2,
    {
        Self {
            exterior: self.exterior.iter().map(&f).collect(),
            interiors: self
                .interiors
                .iter()
                .map(|ring| ring.iter().map(&f).collect())
                .collect(),
        }
    }
}

/// A set of disjoint (or nested) polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    /// Total enclosed area of all members.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.0.iter().map(Polygon::area).sum()
    }

    /// Rotates every member about `origin` by `degrees` (counter-clockwise).
    #[must_use]
    pub fn rotated(&self, origin: &Point2, degrees: f64) -> Self {
        self.map_points(|p| rotate_about(p, origin, degrees))
    }

    /// Returns a copy with every vertex mapped through `f`.
    #[must_use]
    pub fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(&Point2) -> Point2,
    {
        Self(self.0.iter().map(|p| p.map_points(&f)).collect())
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(p: Polygon) -> Self {
        Self(vec![p])
    }
}
