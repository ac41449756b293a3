//! paint-calc - CLI tool to estimate the paint needed for a room.

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use paint_core::{
    generate_report, parse_job_file, parse_numeric_field, parse_opening_spec, DimensionField,
    OpeningKind, ProcessIds, Session, TriggerOutcome,
};

use crate::output::JsonReport;

/// Estimate the liters of paint needed for a room's walls.
///
/// Dimensions are in feet; results are in square meters and liters.
#[derive(Parser, Debug)]
#[command(name = "paint-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Job file (JSON) with dimensions and openings
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Wall height in feet
    #[arg(long)]
    height: Option<String>,

    /// Room width in feet
    #[arg(long)]
    width: Option<String>,

    /// Room length in feet
    #[arg(long)]
    length: Option<String>,

    /// Number of coats
    #[arg(long)]
    coats: Option<String>,

    /// Coverage in square meters per liter
    #[arg(long)]
    coverage: Option<String>,

    /// Door size as WIDTHxHEIGHT in feet (repeatable)
    #[arg(long = "door", value_name = "WxH")]
    doors: Vec<String>,

    /// Window size as WIDTHxHEIGHT in feet (repeatable)
    #[arg(long = "window", value_name = "WxH")]
    windows: Vec<String>,

    /// Print the session, recommendation and chart data as JSON.
    /// A non-finite paint volume is written as "inf", "-inf" or "NaN".
    #[arg(long)]
    json: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Apply the command-line fields to a session through the form operations.
fn build_session(args: &Args) -> Result<Session> {
    let mut ids = ProcessIds;

    let mut session = match &args.input {
        Some(path) => {
            info!("Loading job: {}", path.display());
            parse_job_file(path, &mut ids)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => Session::new(),
    };

    let dimension_flags = [
        (DimensionField::Height, &args.height),
        (DimensionField::Width, &args.width),
        (DimensionField::Length, &args.length),
    ];
    for (field, raw) in dimension_flags {
        if let Some(raw) = raw {
            parse_numeric_field(field.name(), raw)?;
            session = session.set_dimension(field, raw);
        }
    }

    if let Some(raw) = &args.coats {
        parse_numeric_field("coats", raw)?;
        session = session
            .set_dimension(DimensionField::Coats, raw)
            .set_coats(raw);
    }

    if let Some(raw) = &args.coverage {
        parse_numeric_field("coverage", raw)?;
        session = session.set_coverage(raw);
    }

    for (kind, specs) in [
        (OpeningKind::Door, &args.doors),
        (OpeningKind::Window, &args.windows),
    ] {
        for spec in specs {
            let (width, height) = parse_opening_spec(spec)?;
            session = session.push_opening(kind, width, height, &mut ids);
        }
    }

    Ok(session)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let session = build_session(&args)?;

    info!(
        "Room {} x {} x {} ft, {} door(s), {} window(s)",
        session.dimensions.height,
        session.dimensions.width,
        session.dimensions.length,
        session.doors.len(),
        session.windows.len()
    );

    let (session, outcome) = session.trigger();

    for warning in &outcome.validation().warnings {
        warn!("{}", warning);
    }

    if let TriggerOutcome::Suppressed { validation } = &outcome {
        for err in &validation.errors {
            error!("{}", err);
        }
        anyhow::bail!("Calculation not possible with the given dimensions");
    }

    let rendered = if args.json {
        serde_json::to_string_pretty(&JsonReport::new(&session))?
    } else {
        generate_report(&session)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
