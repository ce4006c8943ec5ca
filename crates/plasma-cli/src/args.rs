// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Source Generator Command Line
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::PathBuf;

use clap::Parser;
use plasma_types::error::PlasmaError;
use thiserror::Error;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "plasma-source-generator",
    version,
    about = "Sample D-T neutron birth events from a parametric plasma and write them as JSON."
)]
pub struct Cli {
    /// JSON plasma configuration; built-in plasma when omitted
    #[arg(short = 'c', long, conflicts_with = "parameters")]
    pub config: Option<PathBuf>,

    /// Interchange parameter record, e.g. "schema_version=1, major_radius=4.5, ..."
    #[arg(short = 'p', long)]
    pub parameters: Option<String>,

    /// Number of particles
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub particles: usize,

    /// Base random seed; particle k uses seed + k
    #[arg(short = 's', long, default_value_t = 1)]
    pub seed: u64,

    #[arg(short = 'o', long, default_value = "initial_source.json")]
    pub output: PathBuf,

    /// Write cm/eV host particles instead of m/MeV events
    #[arg(long)]
    pub host_units: bool,

    /// Log filter, overridden by RUST_LOG
    #[arg(short = 'v', long, default_value = "info")]
    pub verbosity: String,
}

/// Where the plasma parameters come from.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSource {
    Defaults,
    ConfigFile(PathBuf),
    Interchange(String),
}

impl Cli {
    pub fn parameter_source(&self) -> ParameterSource {
        match (&self.config, &self.parameters) {
            (Some(path), _) => ParameterSource::ConfigFile(path.clone()),
            (None, Some(record)) => ParameterSource::Interchange(record.clone()),
            (None, None) => ParameterSource::Defaults,
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid log filter '{0}'")]
    LogFilter(String),

    #[error("Non UTF-8 path: {0}")]
    Path(PathBuf),

    #[error(transparent)]
    Plasma(#[from] PlasmaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
