//! Serialisation of a flattened scene for plotting.

pub mod svg;

pub use svg::SvgDocument;
