//! Motifs placed on the lattice: sector stars and stellar dendrites.

use crate::config::SketchParams;
use crate::error::Result;
use crate::generation::{BranchConfig, BranchPlanner, StellarDendrite};
use crate::geometry::{Geometry, MultiPolygon};
use crate::math::Point2;
use crate::operations::creation::SectorStar;
use crate::operations::modification::Simplify;
use crate::operations::offset::MiterOffset;
use crate::rng::RandomSource;

/// Main spoke thickness of every dendrite.
pub const DENDRITE_THICKNESS: f64 = 0.1;

/// A randomised motif, drawn before any geometry is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Motif {
    Star {
        thickness: f64,
        sector_offset: f64,
        sector_width: f64,
    },
    Dendrite {
        branches: Vec<BranchConfig>,
    },
}

/// Geometry of a built motif.
#[derive(Debug, Clone)]
pub struct MotifGeometry {
    /// Drawn with the outline pen.
    pub outline: Geometry,
    /// Drawn with the tier pen.
    pub inked: Geometry,
}

impl Motif {
    /// Draws a motif: a star when a uniform draw exceeds
    /// `dendrite_proportion`, a dendrite otherwise.
    pub fn draw(params: &SketchParams, rng: &mut impl RandomSource) -> Self {
        let size = params.snowflake_size;
        if rng.uniform(0.0, 1.0) > params.dendrite_proportion {
            Self::Star {
                thickness: rng.uniform(0.4, 0.7),
                sector_offset: rng.uniform(1.0, size - 1.0),
                sector_width: rng.uniform(0.0, 1.0),
            }
        } else {
            let plan = BranchPlanner::new(size, DENDRITE_THICKNESS).execute(rng);
            Self::Dendrite {
                branches: plan.branches,
            }
        }
    }

    /// Short name used to prefix scene leaves.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Star { .. } => "star",
            Self::Dendrite { .. } => "dendrite",
        }
    }

    /// Builds the motif at `center`, rotated by the sketch angle.
    ///
    /// Stars are inked as a miter inset of their simplified outline;
    /// dendrites as their stroke skeleton.
    ///
    /// # Errors
    ///
    /// Returns an error if a primitive of the motif is invalid.
    pub fn build(&self, center: Point2, params: &SketchParams) -> Result<MotifGeometry> {
        let size = params.snowflake_size;
        match self {
            Self::Star {
                thickness,
                sector_offset,
                sector_width,
            } => {
                let outline =
                    SectorStar::new(center, size, *thickness, *sector_offset, *sector_width)
                        .with_rotation(params.angle)
                        .execute()?;
                let inset = outline
                    .0
                    .iter()
                    .map(|polygon| {
                        let simplified = Simplify::new(polygon.clone()).execute();
                        MiterOffset::new(simplified, -params.offset_distance).execute()
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(MotifGeometry {
                    outline: outline.into(),
                    inked: MultiPolygon(inset).into(),
                })
            }
            Self::Dendrite { branches } => {
                let dendrite =
                    StellarDendrite::new(center, size, DENDRITE_THICKNESS, branches.clone())
                        .with_rotation(params.angle);
                Ok(MotifGeometry {
                    outline: dendrite.outline()?.into(),
                    inked: dendrite.skeleton().into(),
                })
            }
        }
    }
}
