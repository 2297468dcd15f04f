mod options;

use analyst::{analyze_line, Analyst, API_KEY_VAR};
use anyhow::{anyhow, Error as AnyError};
use clap::Parser;
use elevation::{
    fmt::{decimal, dms, Axis},
    Synth, C,
};
use log::info;
use options::{Cli, Command as CliCmd, LatLon};
use serde::Serialize;
use session::{Click, ProfileLine, Session};
use std::{io::Write, time::Duration};
use textplots::{Chart, Plot, Shape};

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    env_logger::init();

    let Cli {
        points,
        seed,
        delay_ms,
        cmd,
    } = Cli::parse();

    if points.len() < 2 {
        return Err(anyhow!("need at least two points to draw a segment"));
    }

    let mut synth = match seed {
        Some(seed) => Synth::seeded(seed),
        None => Synth::new(),
    };
    if let Some(delay_ms) = delay_ms {
        synth = synth.delay(Duration::from_millis(delay_ms));
    }

    let mut session = Session::new();
    for LatLon(coord) in &points {
        match session.map_click(*coord, &mut synth).await? {
            Click::Started => info!("chain started at {coord:?}"),
            Click::Completed(id) => info!("completed line {id}"),
            Click::Ignored => {}
        }
    }
    // Drawing is done; drop the dangling endpoint.
    session.cancel();

    match cmd {
        CliCmd::Csv => print_csv(&session)?,
        CliCmd::Json => print_json(&session)?,
        CliCmd::Plot => plot_ascii(&session),
        CliCmd::Summary => print_summary(&session)?,
        CliCmd::Analyze => analyze(&mut session).await?,
    }
    Ok(())
}

fn print_csv(session: &Session) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Line,Distance,Longitude,Latitude,Elevation")?;
    for line in session.lines() {
        for point in &line.profile.points {
            writeln!(
                stdout,
                "{},{},{},{},{}",
                line.name, point.distance_m, point.location.x, point.location.y, point.elevation_m
            )?;
        }
    }
    Ok(())
}

fn print_json(session: &Session) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonEntry<'a> {
        name: &'a str,
        color: &'a str,
        location: [C; 2],
        distance: C,
        elevation: C,
    }

    let reshaped: Vec<JsonEntry> = session
        .lines()
        .iter()
        .flat_map(|line| {
            line.profile.points.iter().map(move |point| JsonEntry {
                name: &line.name,
                color: line.color,
                location: [point.location.x, point.location.y],
                distance: point.distance_m,
                elevation: point.elevation_m,
            })
        })
        .collect();
    let json = serde_json::to_string(&reshaped)?;
    println!("{json}");
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn plot_ascii(session: &Session) {
    for line in session.lines() {
        let plot_data: Vec<(f32, f32)> = line
            .profile
            .points
            .iter()
            .map(|point| (point.distance_m as f32, point.elevation_m as f32))
            .collect();
        println!("{} ({:.2} km)", line.name, line.profile.distance_m / 1000.0);
        Chart::new(300, 150, 0.0, line.profile.distance_m as f32)
            .lineplot(&Shape::Lines(&plot_data))
            .display();
    }
}

fn print_summary(session: &Session) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    for line in session.lines() {
        writeln!(stdout, "{} [{}]", line.name, line.color)?;
        writeln!(
            stdout,
            "  start:    {}, {}  ({}, {})",
            dms(line.start.x, Axis::Lon),
            dms(line.start.y, Axis::Lat),
            decimal(line.start.x, Axis::Lon),
            decimal(line.start.y, Axis::Lat),
        )?;
        writeln!(
            stdout,
            "  end:      {}, {}  ({}, {})",
            dms(line.end.x, Axis::Lon),
            dms(line.end.y, Axis::Lat),
            decimal(line.end.x, Axis::Lon),
            decimal(line.end.y, Axis::Lat),
        )?;
        writeln!(stdout, "  distance: {:.2} km", line.profile.distance_m / 1000.0)?;
        if let Some(text) = line.analysis.result() {
            writeln!(stdout, "  analysis: {text}")?;
        }
    }
    Ok(())
}

async fn analyze(session: &mut Session) -> Result<(), AnyError> {
    let Some(analyst) = Analyst::from_env() else {
        return Err(anyhow!("set {API_KEY_VAR} to enable terrain analysis"));
    };

    let ids: Vec<_> = session.lines().iter().map(ProfileLine::id).collect();
    for id in ids {
        analyze_line(&analyst, session, id).await?;
    }
    print_summary(session)
}
