#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Engine die gespiegelde transforms uitrekent. De kern is één pure
//! functie ([`geom::mirror_matrix`]) die een wereldruimte-transform over
//! een vlak spiegelt; daaromheen ligt het componentschema waarmee een
//! host-applicatie de berekening als afhankelijkheidsnode aanstuurt.
//!
//! De berekening is vrij van gedeelde toestand en mag vanuit meerdere
//! threads tegelijk worden aangeroepen; plannen en cachen van evaluaties
//! is aan de host.

pub mod components;
pub mod geom;
pub mod graph;

pub use geom::{FlipAxis, Mat4, MirrorError, MirrorMode, Vec3, mirror_matrix};
