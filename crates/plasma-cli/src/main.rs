// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Generator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Samples neutron birth events from a parametric plasma and writes them to
//! a JSON source file.

mod args;

use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use clap::Parser;
use plasma_source::source::PlasmaSource;
use plasma_types::config::PlasmaConfig;
use plasma_types::event::{HostParticle, SampleEvent};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, CliError, ParameterSource};

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Events {
    Native(Vec<SampleEvent>),
    Host(Vec<HostParticle>),
}

#[derive(Debug, Serialize)]
struct SourceFile {
    particles: usize,
    seed: u64,
    units: &'static str,
    parameters: String,
    events: Events,
}

fn init_logging(verbosity: &str) -> Result<(), CliError> {
    // RUST_LOG overrides --verbosity
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(verbosity)
            .map_err(|_| CliError::LogFilter(verbosity.to_string()))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn load_source(parameters: &ParameterSource) -> Result<PlasmaSource, CliError> {
    let source = match parameters {
        ParameterSource::Defaults => PlasmaSource::new(PlasmaConfig::default())?,
        ParameterSource::ConfigFile(path) => {
            let path = path.to_str().ok_or_else(|| CliError::Path(path.clone()))?;
            PlasmaSource::from_file(path)?
        }
        ParameterSource::Interchange(record) => PlasmaSource::from_interchange(record)?,
    };
    Ok(source)
}

/// Sample `particles` events and assemble the output document.
fn build_source_file(
    source: &PlasmaSource,
    particles: usize,
    seed: u64,
    host_units: bool,
) -> Result<SourceFile, CliError> {
    let events = source.sample_batch(particles, seed)?;
    let (units, events) = if host_units {
        (
            "cm, eV",
            Events::Host(events.iter().map(SampleEvent::to_host_units).collect()),
        )
    } else {
        ("m, MeV", Events::Native(events))
    };

    Ok(SourceFile {
        particles,
        seed,
        units,
        parameters: source.config().to_interchange(),
        events,
    })
}

fn generate(cli: &Cli) -> Result<(), CliError> {
    let source = load_source(&cli.parameter_source())?;

    info!("Settings:");
    info!(" Number of particles: {}", cli.particles);
    info!(" Seed: {}", cli.seed);
    info!(" Source parameters: {}", source.config().to_interchange());
    info!(" Output path: {}", cli.output.display());
    info!(" Host units: {}", cli.host_units);

    let file = build_source_file(&source, cli.particles, cli.seed, cli.host_units)?;
    let writer = BufWriter::new(File::create(&cli.output)?);
    serde_json::to_writer_pretty(writer, &file)?;

    info!(path = %cli.output.display(), "source generation complete");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.verbosity) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match generate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
