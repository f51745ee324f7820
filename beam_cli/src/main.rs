//! # Beamcalc CLI
//!
//! Command-line front end for `beam_core`. Reads beam data in the selected
//! display unit system, stores it canonically in a [`BeamSession`], and prints
//! the analysis results as a table or JSON.

mod cli;
mod edits;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use beam_core::{BeamSession, CalcError, CalcSettings, LoadType};
use cli::{Cli, OutputFormat};
use edits::InputEdits;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "beam_core=debug,beamcalc=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Prompt for the basic fields, defaulting to what the flags already set.
fn prompt_edits(session: &BeamSession, edits: &mut InputEdits) {
    let mut preview = session.clone();
    edits.apply(&mut preview);
    let length_unit = preview.units().length_unit();

    edits.length = Some(prompt_f64(
        &format!("Enter beam length ({}) [{:.2}]: ", length_unit, preview.length()),
        preview.length(),
    ));
    edits.load = Some(prompt_f64(
        &format!("Enter load magnitude ({}) [{:.2}]: ", preview.load_magnitude_unit(), preview.load()),
        preview.load(),
    ));
    if preview.input().load_type == LoadType::Point {
        edits.position = Some(prompt_f64(
            &format!("Enter load position ({} from left support) [{:.2}]: ", length_unit, preview.load_position()),
            preview.load_position(),
        ));
    }
    println!();
}

fn print_table(session: &BeamSession) {
    let input = session.input();
    let units = session.units();

    println!("═══════════════════════════════════════");
    println!("  BEAM RESPONSE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Length:   {:.2} {}", session.length(), units.length_unit());
    println!("  Load:     {:.2} {} ({})", session.load(), session.load_magnitude_unit(), input.load_type);
    if input.load_type == LoadType::Point {
        println!("  Position: {:.2} {} from left support", session.load_position(), units.length_unit());
    }
    println!("  Support:  {}", input.support_type);
    println!();
    println!("{}", session.report());
    println!();
    println!("═══════════════════════════════════════");
}

fn print_error_json(err: &CalcError) {
    if let Ok(json) = serde_json::to_string_pretty(err) {
        eprintln!("{}", json);
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let mut session = BeamSession::new(CalcSettings {
        unit_system: args.units.into(),
        decimal_places: args.decimals,
    });
    tracing::debug!(unit_system = %session.unit_system(), "session started");

    let mut edits = InputEdits::from(&args);
    if args.interactive {
        println!("Beamcalc - Single-Span Beam Estimator");
        println!("=====================================");
        println!();
        prompt_edits(&session, &mut edits);
    }

    if args.strict {
        if let Err(err) = edits.check_strict(&session) {
            if args.format == OutputFormat::Json {
                print_error_json(&err);
            }
            return Err(err.into());
        }
    }
    for property in edits.apply(&mut session) {
        tracing::warn!(property, "ignoring non-positive section property");
    }

    match args.format {
        OutputFormat::Table => print_table(&session),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": session.input(),
                "result": session.result(),
                "display": session.report(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
