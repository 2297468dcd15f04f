use crate::constants::MEAN_EARTH_RADIUS;
use geo::{Coord, CoordFloat};
use num_traits::FromPrimitive;

/// Returns the great-circle distance from `a` to `b`, in meters, on a
/// spherical earth.
///
/// Inputs are taken as-is: out-of-range latitudes or longitudes
/// produce numerically odd results rather than errors.
pub fn haversine_distance<T>(a: Coord<T>, b: Coord<T>) -> T
where
    T: CoordFloat + FromPrimitive,
{
    let two = T::one() + T::one();

    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lon = (b.x - a.x).to_radians();

    let h = (delta_lat / two).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / two).sin().powi(2);
    let central_angle = two * h.sqrt().atan2((T::one() - h).sqrt());

    T::from_f64(MEAN_EARTH_RADIUS).unwrap() * central_angle
}

#[cfg(test)]
mod tests {
    use super::haversine_distance;
    use approx::assert_relative_eq;
    use geo::Coord;

    #[test]
    fn test_zero_distance() {
        let here = Coord { x: -71.308_3, y: 44.283_1 };
        assert_eq!(haversine_distance(here, here), 0.0);
    }

    #[test]
    fn test_one_degree_at_equator() {
        let start = Coord { x: 0.0, y: 0.0 };
        let end = Coord { x: 1.0, y: 0.0 };
        assert_relative_eq!(
            haversine_distance(start, end),
            111_194.926_644_558_74,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_symmetric() {
        let a = Coord { x: -71.308_307_164_413_69, y: 44.283_098_066_031_65 };
        let b = Coord { x: -71.297_207_328_376_8, y: 44.256_280_984_242_78 };
        assert_relative_eq!(
            haversine_distance(a, b),
            haversine_distance(b, a),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_known_leg() {
        // Mt Washington summit cone, roughly 3 km end to end.
        let a = Coord { x: -71.308_307_164_413_69, y: 44.283_098_066_031_65 };
        let b = Coord { x: -71.297_207_328_376_8, y: 44.256_280_984_242_78 };
        let d = haversine_distance(a, b);
        assert!(d > 3_000.0 && d < 3_300.0, "{d}");
    }
}
