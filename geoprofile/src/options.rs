use anyhow::{anyhow, Error as AnyError};
use clap::{Parser, Subcommand};
use elevation::geo::Coord;
use std::str::FromStr;

/// Generate simulated elevation profiles for chained map segments.
#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Segment endpoint as "lat,lon"; repeat to chain. The first
    /// point starts the chain, every further point completes one
    /// segment.
    #[arg(short, long = "point", required = true)]
    pub points: Vec<LatLon>,

    /// Seed for the terrain source. Seeded runs are deterministic
    /// and skip the simulated provider delay.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated provider delay, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Debug, Copy)]
pub struct LatLon(pub Coord<f64>);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s.split_once(',').ok_or_else(|| anyhow!("not a valid lat,lon"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lon = f64::from_str(lon_str.trim())?;
        Ok(Self(Coord { y: lat, x: lon }))
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print profile samples to stdout as CSV.
    Csv,

    /// Print profile samples to stdout as JSON.
    Json,

    /// Plot each profile to the terminal.
    Plot,

    /// Print each line's endpoints, distance, and analysis.
    Summary,

    /// Request an AI landform description for each line, then print
    /// the summary.
    Analyze,
}

#[cfg(test)]
mod tests {
    use super::LatLon;

    #[test]
    fn test_lat_lon_from_str() {
        let LatLon(coord) = "44.2831,-71.3083".parse().unwrap();
        assert_eq!(coord.y, 44.2831);
        assert_eq!(coord.x, -71.3083);

        let LatLon(coord) = " -0.5 , 0.5 ".parse().unwrap();
        assert_eq!(coord.y, -0.5);
        assert_eq!(coord.x, 0.5);

        assert!("44.2831".parse::<LatLon>().is_err());
        assert!("north,west".parse::<LatLon>().is_err());
    }
}
