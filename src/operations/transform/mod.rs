mod perspective;

pub use perspective::{Perspective, DEFAULT_CAMERA_DISTANCE};
