// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlasmaError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    /// Radial scan found no bin whose cumulative value bounds `u1`.
    #[error("No radial bin found for u1={u1} across {bins} bins")]
    SamplingDomain { u1: f64, bins: usize },

    /// One of the eight supplied random draws is outside its allowed interval.
    #[error("Random draw {index} out of domain: {value}")]
    InputDomain { index: usize, value: f64 },

    #[error("Interchange format error: {0}")]
    Interchange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PlasmaResult<T> = Result<T, PlasmaError>;
