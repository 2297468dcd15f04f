use crate::C;

/// Radius of the spherical earth all distances assume, in meters.
pub(crate) const MEAN_EARTH_RADIUS: C = 6_371_000.0;
