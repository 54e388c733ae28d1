pub mod dendrite;
pub mod lattice;

pub use dendrite::{BranchConfig, BranchPlan, BranchPlanner, StellarDendrite};
pub use lattice::TriangularLattice;
