use geo::BooleanOps;

use crate::geometry::convert::multi_polygon_from_geo;
use crate::geometry::MultiPolygon;

/// Computes the boolean difference `subject - tool`.
#[derive(Debug)]
pub struct Subtract {
    subject: MultiPolygon,
    tool: MultiPolygon,
}

impl Subtract {
    /// Creates a new `Subtract` operation.
    #[must_use]
    pub fn new(subject: MultiPolygon, tool: MultiPolygon) -> Self {
        Self { subject, tool }
    }

    /// Executes the difference. The result may have zero pieces.
    #[must_use]
    pub fn execute(&self) -> MultiPolygon {
        let subject = geo::MultiPolygon::from(&self.subject);
        let tool = geo::MultiPolygon::from(&self.tool);
        multi_polygon_from_geo(&subject.difference(&tool))
    }
}
