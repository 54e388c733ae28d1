//! The three nested sector stars that decide where, and with which pen,
//! lattice motifs are drawn.

use crate::config::SketchParams;
use crate::error::Result;
use crate::geometry::MultiPolygon;
use crate::math::Point2;
use crate::operations::creation::SectorStar;
use crate::operations::query::Contains;
use crate::scene::Layer;

/// The outer, inner and centre containment stars.
#[derive(Debug)]
pub struct Boundaries {
    pub outer: MultiPolygon,
    pub inner: MultiPolygon,
    pub centre: MultiPolygon,
    outer_query: Contains,
    inner_query: Contains,
    centre_query: Contains,
}

impl Boundaries {
    /// Builds all three stars about `center`.
    ///
    /// The outer star's paddles start `sector_offset` from the centre; each
    /// smaller star pushes its paddle start out by the radius difference, so
    /// paddles shorten towards the centre star. Stars are turned by 30° plus
    /// the sketch angle so their points sit between lattice rows.
    ///
    /// # Errors
    ///
    /// Returns an error if any star cannot be built from the parameters,
    /// e.g. a paddle too short for its thickness.
    pub fn build(params: &SketchParams, center: Point2) -> Result<Self> {
        let rotation = 30.0 + params.angle;
        let outer_radius = params.outer_radius();

        let star = |radius: f64, thickness: f64, sector_width: f64| {
            SectorStar::new(
                center,
                radius,
                thickness,
                sector_offset(params, radius),
                sector_width,
            )
            .with_rotation(rotation)
            .execute()
        };

        let outer = star(outer_radius, params.outer_thickness, params.sector_width)?;
        let inner = star(
            params.inner_radius(),
            params.inner_thickness,
            params.sector_width,
        )?;
        let centre = star(
            params.centre_radius(),
            params.centre_thickness,
            params.centre_sector_width,
        )?;

        Ok(Self {
            outer_query: Contains::new(&outer),
            inner_query: Contains::new(&inner),
            centre_query: Contains::new(&centre),
            outer,
            inner,
            centre,
        })
    }

    /// Whether `point` lies inside the outer star.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.outer_query.point(point)
    }

    /// Picks the tier layer for a motif centred at `point`. The innermost
    /// containing star wins.
    #[must_use]
    pub fn tier(&self, point: &Point2, params: &SketchParams) -> Layer {
        let layers = &params.layers;
        if self.centre_query.point(point) {
            layers.centre_tier
        } else if self.inner_query.point(point) {
            layers.inner_tier
        } else {
            layers.outer_tier
        }
    }
}

/// Distance from the centre at which a boundary star of `radius` starts its
/// paddles.
#[must_use]
pub fn sector_offset(params: &SketchParams, radius: f64) -> f64 {
    params.sector_offset + (params.outer_radius() - radius)
}
