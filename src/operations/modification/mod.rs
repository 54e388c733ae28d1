mod simplify;

pub use simplify::Simplify;
