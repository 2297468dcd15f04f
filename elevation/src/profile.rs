use crate::{
    math::{haversine_distance, LerpIter},
    synth::Synth,
    ElevationError, C,
};
use geo::Coord;
use log::debug;
use rand::Rng;

/// Number of equal-length steps a segment is divided into. A default
/// profile therefore carries `DEFAULT_SEGMENTS + 1` points.
pub const DEFAULT_SEGMENTS: usize = 50;

/// One sample along a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationPoint {
    /// Distance from the profile's start, in meters.
    pub distance_m: C,

    /// Synthesized elevation, in meters above sea level.
    pub elevation_m: C,

    /// Position of this sample on the segment.
    pub location: Coord<C>,
}

/// An elevation profile of the straight segment from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Total great-circle distance from `start` to `end`, in meters.
    pub distance_m: C,

    /// Samples from `start` (distance 0) to `end` (distance ≈
    /// `distance_m`), in walking order.
    pub points: Vec<ElevationPoint>,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder {
            start: None,
            end: None,
            segments: DEFAULT_SEGMENTS,
        }
    }

    /// Shorthand for a default-length profile from `start` to `end`.
    pub async fn new<R: Rng>(
        start: Coord<C>,
        end: Coord<C>,
        synth: &mut Synth<R>,
    ) -> Result<Self, ElevationError> {
        Self::builder().start(start).end(end).build(synth).await
    }
}

pub struct ProfileBuilder {
    start: Option<Coord<C>>,

    end: Option<Coord<C>>,

    /// Number of steps between the endpoints.
    segments: usize,
}

impl ProfileBuilder {
    /// Start point of the segment (required).
    #[must_use]
    pub fn start(mut self, coord: Coord<C>) -> Self {
        self.start = Some(coord);
        self
    }

    /// End point of the segment (required).
    #[must_use]
    pub fn end(mut self, coord: Coord<C>) -> Self {
        self.end = Some(coord);
        self
    }

    /// Number of steps between the endpoints (defaults to
    /// [`DEFAULT_SEGMENTS`], must be non-zero).
    #[must_use]
    pub fn segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub async fn build<R: Rng>(&self, synth: &mut Synth<R>) -> Result<Profile, ElevationError> {
        let start = self.start.ok_or(ElevationError::Builder("start"))?;
        let end = self.end.ok_or(ElevationError::Builder("end"))?;
        if self.segments == 0 {
            return Err(ElevationError::Builder("segments"));
        }

        let distance_m = haversine_distance(start, end);
        let route: Vec<Coord<C>> = LerpIter::new(start, end, self.segments).collect();

        let now = std::time::Instant::now();
        let points = synth.sample(distance_m, &route).await;
        debug!(
            "profile; len: {}, distance_m: {distance_m}, synth_exec: {:?}",
            points.len(),
            now.elapsed()
        );

        Ok(Profile { distance_m, points })
    }
}
