use tracing::debug;

use super::MiterOffset;
use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::operations::query::IsEmpty;
use crate::scene::{Group, Layer};

/// Hard cap on in-fill rings; more means the shrink loop is not converging.
pub const MAX_FILL_ITERATIONS: usize = 50;

/// Fills a polygon with concentric inset rings spaced one pen width apart.
///
/// Produces a group named `filled_polygon` holding the original outline
/// (`outer_polygon`) followed by rings `fill_polygon_1`, `fill_polygon_2`, ...
/// until the next inset ring is empty.
#[derive(Debug)]
pub struct ConcentricFill {
    polygon: Polygon,
    pen_width: f64,
    layer: Layer,
    max_iterations: usize,
}

impl ConcentricFill {
    /// Creates a new fill operation. Rings are placed on layer 1 by default.
    #[must_use]
    pub fn new(polygon: Polygon, pen_width: f64) -> Self {
        Self {
            polygon,
            pen_width,
            layer: 1,
            max_iterations: MAX_FILL_ITERATIONS,
        }
    }

    /// Sets the layer for the outline and every ring.
    #[must_use]
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    /// Overrides the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Executes the fill.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::IterationLimitExceeded` if more than the
    /// allowed number of rings would be generated (for example with a
    /// non-positive pen width, which never shrinks to empty).
    pub fn execute(&self) -> Result<Group> {
        let mut group = Group::new("filled_polygon");
        group.add_leaf(self.layer, self.polygon.clone(), "outer_polygon")?;

        let base = self.polygon.exterior_only().to_ccw();
        let mut ring_index = 1;
        loop {
            #[allow(clippy::cast_precision_loss)]
            let distance = -self.pen_width * ring_index as f64;
            let ring = MiterOffset::new(base.clone(), distance).execute()?;
            if IsEmpty::new(&ring).relative_to(&base).execute() {
                break;
            }
            if ring_index > self.max_iterations {
                return Err(OperationError::IterationLimitExceeded {
                    operation: "concentric fill",
                    limit: self.max_iterations,
                }
                .into());
            }
            group.add_leaf(self.layer, ring, format!("fill_polygon_{ring_index}"))?;
            ring_index += 1;
        }

        debug!(rings = ring_index - 1, pen_width = self.pen_width, "concentric fill done");
        Ok(group)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SnowflakeError;
    use crate::geometry::Geometry;
    use crate::math::Point2;
    use crate::operations::creation::Hexagon;

    fn ring_areas(group: &Group) -> Vec<f64> {
        group
            .leaves()
            .iter()
            .map(|leaf| match &leaf.geometry {
                Geometry::Polygon(p) => p.area(),
                other => panic!("unexpected {}", other.kind()),
            })
            .collect()
    }

    #[test]
    fn hexagon_fill_shrinks_monotonically() {
        let hex = Hexagon::new(Point2::new(5.0, 5.0), 3.0).execute().unwrap();
        let group = ConcentricFill::new(hex, 0.3).with_layer(4).execute().unwrap();
        let areas = ring_areas(&group);
        // Apothem 3·cos(30°) ≈ 2.598 allows eight 0.3 rings.
        assert_eq!(areas.len(), 1 + 8);
        for pair in areas.windows(2) {
            assert!(pair[1] < pair[0], "area grew: {pair:?}");
        }
        assert!(group.leaves().iter().all(|l| l.layer == 4));
        assert_eq!(group.leaves()[1].name, "fill_polygon_1");
    }

    #[test]
    fn non_shrinking_fill_hits_iteration_cap() {
        let hex = Hexagon::new(Point2::origin(), 1.0).execute().unwrap();
        let err = ConcentricFill::new(hex, -0.1).execute().unwrap_err();
        assert!(matches!(
            err,
            SnowflakeError::Operation(OperationError::IterationLimitExceeded { limit: 50, .. })
        ));
    }

    #[test]
    fn custom_cap_is_respected() {
        let hex = Hexagon::new(Point2::origin(), 10.0).execute().unwrap();
        let result = ConcentricFill::new(hex, 0.1).with_max_iterations(5).execute();
        assert!(result.is_err());
    }
}
