// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mapping of a sampled minor radius onto the shaped flux surface and the
//! toroidal wedge.
//!
//! Poloidal cross-section (Miller-like, triangularity δ, elongation κ):
//!   R = R0 + ρ·cos(α + δ·sin α) + Δ(ρ),  Δ(ρ) = Δ0·(1 − (ρ/a)²)
//!   Z = κ·ρ·sin α
//! Toroidal placement: x = R·sin φ, y = R·cos φ.

use std::f64::consts::PI;

use plasma_types::config::PlasmaConfig;
use plasma_types::constants::REFERENCE_TWO_PI;

/// Shafranov shift of the flux surface at minor radius `rho`.
pub fn shafranov_shift(config: &PlasmaConfig, rho: f64) -> f64 {
    config.shafranov_shift * (1.0 - (rho / config.minor_radius).powi(2))
}

/// Cylindrical `(R, Z)` of the point at minor radius `rho` and poloidal draw `u3`.
pub fn poloidal_position(config: &PlasmaConfig, rho: f64, u3: f64) -> (f64, f64) {
    let alpha = REFERENCE_TWO_PI * u3;
    let shift = shafranov_shift(config, rho);

    let r = config.major_radius + rho * (alpha + config.triangularity * alpha.sin()).cos() + shift;
    let z = config.elongation * rho * alpha.sin();
    (r, z)
}

/// Toroidal sector the source is confined to, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToroidalWedge {
    min_rad: f64,
    max_rad: f64,
}

impl ToroidalWedge {
    pub fn from_degrees(min_deg: f64, max_deg: f64) -> Self {
        Self {
            min_rad: (min_deg / 180.0) * PI,
            max_rad: (max_deg / 180.0) * PI,
        }
    }

    pub fn min_rad(&self) -> f64 {
        self.min_rad
    }

    pub fn max_rad(&self) -> f64 {
        self.max_rad
    }

    pub fn extent(&self) -> f64 {
        self.max_rad - self.min_rad
    }

    /// Toroidal angle for draw `u4`, uniform over the wedge.
    pub fn angle(&self, u4: f64) -> f64 {
        self.extent() * u4 + self.min_rad
    }

    /// Cartesian `(x, y)` of major radius `r` at toroidal draw `u4`.
    pub fn to_xy(&self, r: f64, u4: f64) -> (f64, f64) {
        let phi = self.angle(u4);
        (r * phi.sin(), r * phi.cos())
    }
}
