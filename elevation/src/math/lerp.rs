use geo::{Coord, CoordFloat};
use num_traits::FromPrimitive;

/// Iterator over evenly spaced positions on the straight line, in
/// coordinate space, from `start` to `end`, both inclusive.
///
/// Positions are interpolated per axis. This is deliberately not a
/// great-circle path; displayed segments are straight lines on the
/// map, so the samples follow them.
pub struct LerpIter<T: CoordFloat = f64> {
    start: Coord<T>,
    end: Coord<T>,
    inverse: T,
    total_points: usize,
    current_point: usize,
}

impl<T> LerpIter<T>
where
    T: CoordFloat + FromPrimitive,
{
    /// Returns an iterator yielding `segments + 1` positions from
    /// `start` to `end`.
    pub fn new(start: Coord<T>, end: Coord<T>, segments: usize) -> Self {
        Self {
            start,
            end,
            inverse: T::one() / T::from_usize(segments).unwrap(),
            total_points: segments + 1,
            current_point: 0,
        }
    }
}

impl<T> Iterator for LerpIter<T>
where
    T: CoordFloat + FromPrimitive,
{
    type Item = Coord<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_point < self.total_points {
            let ratio = T::from_usize(self.current_point).unwrap() * self.inverse;
            self.current_point += 1;
            Some(Coord {
                x: self.start.x + (self.end.x - self.start.x) * ratio,
                y: self.start.y + (self.end.y - self.start.y) * ratio,
            })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_points - self.current_point;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for LerpIter<T>
where
    T: CoordFloat + FromPrimitive,
{
    fn len(&self) -> usize {
        self.total_points - self.current_point
    }
}

#[cfg(test)]
mod tests {
    use super::LerpIter;
    use geo::Coord;

    #[test]
    fn test_lerp_iter() {
        let start = Coord { x: -0.5, y: -0.5 };
        let end = Coord { x: 0.5, y: 0.5 };
        let lerp = LerpIter::new(start, end, 4);
        assert_eq!(lerp.len(), 5);
        let points = lerp.collect::<Vec<_>>();
        let expected = vec![
            Coord { x: -0.5, y: -0.5 },
            Coord { x: -0.25, y: -0.25 },
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 0.25, y: 0.25 },
            Coord { x: 0.5, y: 0.5 },
        ];
        assert_eq!(points, expected);
    }

    #[test]
    fn test_endpoints_exact() {
        let start = Coord { x: 105.3, y: 35.7 };
        let end = Coord { x: 106.1, y: 34.9 };
        let points = LerpIter::new(start, end, 50).collect::<Vec<_>>();
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], start);
        assert_eq!(points[50], end);
    }

    #[test]
    fn test_single_segment() {
        let start = Coord { x: 0.0, y: 0.0 };
        let end = Coord { x: 2.0, y: 0.0 };
        let points = LerpIter::new(start, end, 1).collect::<Vec<_>>();
        assert_eq!(points, vec![start, end]);
    }
}
