//! # Primitives
//!
//! Mesh generation for the shapes tiles are authored from.

pub mod cuboid;
pub mod plane;
pub mod ramp;

pub use cuboid::create_cuboid;
pub use plane::create_plane;
pub use ramp::{create_ramp, Slope};
