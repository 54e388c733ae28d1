use crate::math::Point2;

/// An open, ordered chain of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Point2>);

impl LineString {
    /// Creates a two-point segment.
    #[must_use]
    pub fn segment(start: Point2, end: Point2) -> Self {
        Self(vec![start, end])
    }

    /// Returns a copy with every vertex mapped through `f`.
    #[must_use]
    pub fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(&Point2) -> Point2,
    {
        Self(self.0.iter().map(f).collect())
    }

    /// Total length of the chain.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.0.windows(2).map(|w| nalgebra::distance(&w[0], &w[1])).sum()
    }
}

/// A collection of open line strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
    /// Returns a copy with every vertex mapped through `f`.
    #[must_use]
    pub fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(&Point2) -> Point2,
    {
        Self(self.0.iter().map(|ls| ls.map_points(&f)).collect())
    }
}
