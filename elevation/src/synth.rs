use crate::{profile::ElevationPoint, C};
use geo::Coord;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;
use tokio::time::sleep;

/// Simulated round-trip latency of an unseeded source, standing in
/// for a real elevation provider.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

/// Procedural elevation source.
///
/// Heights come from a smoothed random walk over the route, shaped by
/// a large-scale sine trend and seeded from the start position so
/// nearby segments begin at similar altitudes. Repeated samples of
/// the same segment differ unless the source was seeded.
#[derive(Debug)]
pub struct Synth<R = StdRng> {
    rng: R,
    delay: Duration,
}

impl Synth<StdRng> {
    /// Returns a source seeded from the operating system, with the
    /// default simulated latency.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            delay: DEFAULT_DELAY,
        }
    }

    /// Returns a deterministic source with no simulated latency.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            delay: Duration::ZERO,
        }
    }
}

impl Default for Synth<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Synth<R> {
    /// Returns a source drawing from `rng`, with the default
    /// simulated latency.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            delay: DEFAULT_DELAY,
        }
    }

    /// Overrides the simulated provider latency.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Synthesizes an elevation for every position on `route`.
    ///
    /// The walk is order dependent: each height derives from the
    /// previous one, so samples are generated sequentially. Two draws
    /// are taken per sample, in a fixed order (display noise, then
    /// the walk increment), so a recorded draw sequence reproduces a
    /// profile exactly.
    pub(crate) async fn sample(
        &mut self,
        total_distance_m: C,
        route: &[Coord<C>],
    ) -> Vec<ElevationPoint> {
        sleep(self.delay).await;

        let Some(start) = route.first() else {
            return Vec::new();
        };
        let segments = route.len() - 1;

        let mut elevation_m = ((start.y * 10.0).sin() * 500.0
            + (start.x * 10.0).cos() * 500.0
            + 1000.0)
            .max(0.0);

        let mut points = Vec::with_capacity(route.len());
        for (index, location) in route.iter().enumerate() {
            let distance_m = (index as C / segments as C) * total_distance_m;

            let noise = self.rng.random_range(-10.0..10.0);
            let trend = (distance_m / (total_distance_m / 3.0)).sin() * 200.0;

            elevation_m += (self.rng.random::<C>() - 0.5) * 50.0 + trend * 0.05;
            if elevation_m < 0.0 {
                // Sea level floor.
                elevation_m = 0.0;
            }

            points.push(ElevationPoint {
                distance_m: round1(distance_m),
                elevation_m: round1((elevation_m + noise).max(0.0)),
                location: *location,
            });
        }
        points
    }
}

fn round1(val: C) -> C {
    (val * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{round1, Coord, Synth};

    #[test]
    fn test_round1() {
        assert_eq!(round1(1234.567_9), 1234.6);
        assert_eq!(round1(0.049), 0.0);
        assert_eq!(round1(-3.25), -3.3);
    }

    #[tokio::test]
    async fn test_empty_route() {
        let mut synth = Synth::seeded(0);
        assert!(synth.sample(0.0, &[]).await.is_empty());
    }

    #[tokio::test]
    async fn test_walk_stays_above_sea_level() {
        // A start position whose seed height is sea level, so the
        // walk hugs the floor and the noise term pulls below it.
        let start = Coord {
            x: std::f64::consts::PI / 10.0,
            y: -std::f64::consts::FRAC_PI_2 / 10.0,
        };
        let route: Vec<Coord<f64>> = (0..=50)
            .map(|index| Coord {
                x: start.x + f64::from(index) * 0.01,
                y: start.y,
            })
            .collect();

        let mut synth = Synth::seeded(11);
        let points = synth.sample(55_000.0, &route).await;
        assert_eq!(points.len(), 51);
        assert!(points.iter().all(|point| point.elevation_m >= 0.0));
    }

    #[tokio::test]
    async fn test_distances_cover_route() {
        let route: Vec<Coord<f64>> = (0..=4)
            .map(|index| Coord {
                x: f64::from(index) * 0.25,
                y: 0.0,
            })
            .collect();

        let mut synth = Synth::seeded(5);
        let points = synth.sample(1_000.0, &route).await;
        let distances: Vec<f64> = points.iter().map(|point| point.distance_m).collect();
        assert_eq!(distances, vec![0.0, 250.0, 500.0, 750.0, 1_000.0]);
    }
}
