//! Top-level orchestration of a snowflake card.
//!
//! A run walks four phases in order, each a single deterministic pass:
//!
//! 1. build the nested outer/inner/centre boundary stars,
//! 2. fill the outer star with lattice motifs, inked by tier,
//! 3. scatter glitter stars around the snowflake,
//! 4. hand back the scene graph for flattening.
//!
//! A motif whose geometry fails to build is logged and skipped; it never
//! aborts the run.

pub mod boundaries;
pub mod motif;
pub mod scatter;

use tracing::{debug, info, trace, warn};

pub use boundaries::Boundaries;
pub use motif::{Motif, MotifGeometry};
pub use scatter::{PlacedCenters, ScatterPass};

use crate::config::SketchParams;
use crate::error::Result;
use crate::generation::TriangularLattice;
use crate::math::Point2;
use crate::rng::RandomSource;
use crate::scene::{Group, Layer, SceneEntry};

/// Name of the root group every qualified name starts with.
pub const ROOT_NAME: &str = "snowflake card";

/// Lattice motifs are sampled slightly beyond the outer star's radius.
const LATTICE_REACH: f64 = 1.1;

/// Where a lattice motif ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub center: Point2,
    pub kind: &'static str,
    /// Tier layer the motif is inked with.
    pub layer: Layer,
    /// Leaf name of the inked geometry inside the `snowflake` group.
    pub inked_name: String,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct Composition {
    pub root: Group,
    pub placements: Vec<Placement>,
    pub glitter: Vec<Point2>,
}

impl Composition {
    /// The flattened `(layer, geometry, qualified name)` sequence.
    #[must_use]
    pub fn flatten(&self) -> Vec<SceneEntry> {
        self.root.flatten()
    }
}

/// Builds a snowflake card from parameters and a random source.
///
/// The random source is owned for the whole run, so a fixed seed replays
/// the same composition.
pub struct Compositor<'a, R> {
    params: &'a SketchParams,
    rng: R,
}

impl<'a, R: RandomSource> Compositor<'a, R> {
    #[must_use]
    pub fn new(params: &'a SketchParams, rng: R) -> Self {
        Self { params, rng }
    }

    /// Runs every phase and returns the composed scene.
    ///
    /// # Errors
    ///
    /// Returns a config error for invalid parameters, or an error if a
    /// boundary star, a lattice, or the scene graph itself cannot be built.
    /// Individual motif failures are skipped.
    pub fn execute(mut self) -> Result<Composition> {
        let params = self.params;
        params.validate()?;

        let (width, height) = params.page_dimensions();
        let center = Point2::new(width * params.centre_x_prop, height * params.centre_y_prop);
        let mut root = Group::new(ROOT_NAME);

        if params.page_divider {
            root.add_leaf(
                params.layers.divider,
                scatter::fold_line(width, height),
                "page_divider",
            )?;
        }

        let boundaries = Boundaries::build(params, center)?;
        if params.debug {
            let mut debug_group = Group::new("boundaries");
            debug_group.add_leaf(params.layers.debug, boundaries.outer.clone(), "outer")?;
            debug_group.add_leaf(params.layers.debug, boundaries.inner.clone(), "inner")?;
            debug_group.add_leaf(params.layers.debug, boundaries.centre.clone(), "centre")?;
            root.add_group("boundaries", debug_group)?;
        }

        let mut placed = PlacedCenters::new();
        let mut snowflake = Group::new("snowflake");
        let placements = self.fill_lattice(center, &boundaries, &mut placed, &mut snowflake)?;
        root.add_group("snowflake", snowflake)?;

        let mut glitter_group = Group::new("glitter");
        let glitter = ScatterPass::new(params, &boundaries).execute(
            &mut self.rng,
            &mut placed,
            &mut glitter_group,
        )?;
        root.add_group("glitter", glitter_group)?;

        info!(
            motifs = placements.len(),
            glitter = glitter.len(),
            leaves = root.leaf_count(),
            "composition finished"
        );
        Ok(Composition {
            root,
            placements,
            glitter,
        })
    }

    fn fill_lattice(
        &mut self,
        center: Point2,
        boundaries: &Boundaries,
        placed: &mut PlacedCenters,
        group: &mut Group,
    ) -> Result<Vec<Placement>> {
        let params = self.params;
        let points = TriangularLattice::new(
            center,
            params.grid_spacing,
            params.outer_radius() * LATTICE_REACH,
        )
        .with_angle(30.0 + params.angle)
        .execute()?;
        debug!(candidates = points.len(), "lattice sampled");

        let mut placements = Vec::new();
        for p in points.into_iter().filter(|p| boundaries.contains(p)) {
            let motif = Motif::draw(params, &mut self.rng);
            let layer = boundaries.tier(&p, params);
            let built = match motif.build(p, params) {
                Ok(built) => built,
                Err(e) => {
                    warn!(x = p.x, y = p.y, kind = motif.kind(), error = %e, "motif skipped");
                    continue;
                }
            };

            let kind = motif.kind();
            trace!(x = p.x, y = p.y, kind, layer, "motif placed");
            let suffix = format!("{:.3}_{:.3}", p.x, p.y);
            let inked_name = format!("{kind}_inked_{suffix}");
            group.add_leaf(params.layers.outline, built.outline, format!("{kind}_{suffix}"))?;
            group.add_leaf(layer, built.inked, inked_name.clone())?;
            placed.insert(&p)?;
            placements.push(Placement {
                center: p,
                kind,
                layer,
                inked_name,
            });
        }
        Ok(placements)
    }
}
