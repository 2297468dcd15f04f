//! Point-to-point elevation profiles over procedurally synthesized
//! terrain.
//!
//! No real-world elevation data is involved: a [`Synth`] source walks
//! the segment and produces organic-looking heights from a smoothed
//! random walk. Distances are true great-circle distances; sample
//! positions are straight-line interpolations in coordinate space.

mod constants;
mod error;
pub mod fmt;
mod math;
mod profile;
mod synth;

pub use crate::{
    error::ElevationError,
    math::haversine_distance,
    profile::{ElevationPoint, Profile, ProfileBuilder, DEFAULT_SEGMENTS},
    synth::{Synth, DEFAULT_DELAY},
};
pub use geo;

/// Base floating point type used for all coordinates and calculations.
///
/// Note: this _could_ be a generic parameter, but doing so makes the
/// library more complicated, and the synthesized data has far less
/// precision than even `f32` anyway.
pub type C = f64;
