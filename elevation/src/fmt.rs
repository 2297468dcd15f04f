//! Textual rendering of coordinates.

use crate::C;

/// Which axis a value lies on.
///
/// Longitudes are normalized before rendering; latitudes are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Lat,
    Lon,
}

/// Maps any longitude to the equivalent value in `[-180, 180)`.
pub fn normalize_lon(lon: C) -> C {
    ((lon + 180.0) % 360.0 + 360.0) % 360.0 - 180.0
}

/// Renders `value` with 4 decimal places.
pub fn decimal(value: C, axis: Axis) -> String {
    let value = match axis {
        Axis::Lat => value,
        Axis::Lon => normalize_lon(value),
    };
    format!("{value:.4}")
}

/// Renders `value` as degrees, minutes and seconds with a direction
/// suffix, e.g. `71°18′29″W`.
///
/// Minutes and seconds truncate rather than round. The suffix comes
/// from the sign of the normalized value, so a longitude of 360 is
/// `0°0′0″E` and one of -190 lies east.
pub fn dms(value: C, axis: Axis) -> String {
    let value = match axis {
        Axis::Lat => value,
        Axis::Lon => normalize_lon(value),
    };

    let absolute = value.abs();
    let degrees = absolute.floor();
    let minutes_whole = (absolute - degrees) * 60.0;
    let minutes = minutes_whole.floor();
    let seconds = ((minutes_whole - minutes) * 60.0).floor();

    let direction = match axis {
        Axis::Lat if value >= 0.0 => 'N',
        Axis::Lat => 'S',
        Axis::Lon if value >= 0.0 => 'E',
        Axis::Lon => 'W',
    };

    format!("{degrees:.0}°{minutes:.0}′{seconds:.0}″{direction}")
}
