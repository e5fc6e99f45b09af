mod core;
mod mirror;

pub use core::{Mat4, Vec3};
pub use mirror::{FlipAxis, MirrorError, MirrorMode, mirror_matrix};
