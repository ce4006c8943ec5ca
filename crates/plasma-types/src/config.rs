// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{PlasmaError, PlasmaResult};

/// Radial profile family used for ion density and temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    /// Single parabola from the magnetic axis to the separatrix (L-mode).
    Parabolic,
    /// Peaked core inside the pedestal, linear edge decay outside (H-mode).
    Pedestal,
}

impl ProfileMode {
    /// `plasma_id == 0` selects the parabolic family, any other id the pedestal one.
    pub fn from_plasma_id(plasma_id: i32) -> Self {
        if plasma_id == 0 {
            ProfileMode::Parabolic
        } else {
            ProfileMode::Pedestal
        }
    }
}

/// Parametric plasma description consumed by the neutron source.
///
/// Lengths in meters, densities in ions/m³, temperatures in keV, toroidal
/// angles in degrees. Field order is the order of the interchange record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlasmaConfig {
    #[serde(default = "default_major_radius")]
    pub major_radius: f64,
    #[serde(default = "default_minor_radius")]
    pub minor_radius: f64,
    #[serde(default = "default_elongation")]
    pub elongation: f64,
    #[serde(default = "default_triangularity")]
    pub triangularity: f64,
    #[serde(default)]
    pub shafranov_shift: f64,
    #[serde(default = "default_pedestal_radius")]
    pub pedestal_radius: f64,
    #[serde(default = "default_ion_density_pedestal")]
    pub ion_density_pedestal: f64,
    #[serde(default = "default_ion_density_separatrix")]
    pub ion_density_separatrix: f64,
    #[serde(default = "default_ion_density_origin")]
    pub ion_density_origin: f64,
    #[serde(default = "default_ion_density_peaking_factor")]
    pub ion_density_peaking_factor: f64,
    #[serde(default = "default_ion_temperature_pedestal")]
    pub ion_temperature_pedestal: f64,
    #[serde(default = "default_ion_temperature_separatrix")]
    pub ion_temperature_separatrix: f64,
    #[serde(default = "default_ion_temperature_origin")]
    pub ion_temperature_origin: f64,
    #[serde(default = "default_ion_temperature_peaking_factor")]
    pub ion_temperature_peaking_factor: f64,
    #[serde(default = "default_ion_temperature_beta")]
    pub ion_temperature_beta: f64,
    /// Free-form label, carried through interchange only.
    #[serde(default = "default_plasma_type")]
    pub plasma_type: String,
    #[serde(default = "default_plasma_id")]
    pub plasma_id: i32,
    #[serde(default = "default_number_of_bins")]
    pub number_of_bins: usize,
    #[serde(default)]
    pub min_toroidal_angle: f64,
    #[serde(default = "default_max_toroidal_angle")]
    pub max_toroidal_angle: f64,
}

fn default_major_radius() -> f64 {
    4.5
}
fn default_minor_radius() -> f64 {
    1.5
}
fn default_elongation() -> f64 {
    2.0
}
fn default_triangularity() -> f64 {
    0.55
}
fn default_pedestal_radius() -> f64 {
    0.8
}
fn default_ion_density_pedestal() -> f64 {
    1.09e20
}
fn default_ion_density_separatrix() -> f64 {
    3e19
}
fn default_ion_density_origin() -> f64 {
    1.09e20
}
fn default_ion_density_peaking_factor() -> f64 {
    1.0
}
fn default_ion_temperature_pedestal() -> f64 {
    6.09
}
fn default_ion_temperature_separatrix() -> f64 {
    0.1
}
fn default_ion_temperature_origin() -> f64 {
    45.9
}
fn default_ion_temperature_peaking_factor() -> f64 {
    8.06
}
fn default_ion_temperature_beta() -> f64 {
    6.0
}
fn default_plasma_type() -> String {
    "plasma".to_string()
}
fn default_plasma_id() -> i32 {
    1
}
fn default_number_of_bins() -> usize {
    100
}
fn default_max_toroidal_angle() -> f64 {
    360.0
}

impl Default for PlasmaConfig {
    fn default() -> Self {
        PlasmaConfig {
            major_radius: default_major_radius(),
            minor_radius: default_minor_radius(),
            elongation: default_elongation(),
            triangularity: default_triangularity(),
            shafranov_shift: 0.0,
            pedestal_radius: default_pedestal_radius(),
            ion_density_pedestal: default_ion_density_pedestal(),
            ion_density_separatrix: default_ion_density_separatrix(),
            ion_density_origin: default_ion_density_origin(),
            ion_density_peaking_factor: default_ion_density_peaking_factor(),
            ion_temperature_pedestal: default_ion_temperature_pedestal(),
            ion_temperature_separatrix: default_ion_temperature_separatrix(),
            ion_temperature_origin: default_ion_temperature_origin(),
            ion_temperature_peaking_factor: default_ion_temperature_peaking_factor(),
            ion_temperature_beta: default_ion_temperature_beta(),
            plasma_type: default_plasma_type(),
            plasma_id: default_plasma_id(),
            number_of_bins: default_number_of_bins(),
            min_toroidal_angle: 0.0,
            max_toroidal_angle: default_max_toroidal_angle(),
        }
    }
}

impl PlasmaConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &str) -> PlasmaResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn profile_mode(&self) -> ProfileMode {
        ProfileMode::from_plasma_id(self.plasma_id)
    }

    /// Check every construction invariant at once. Nothing is clamped.
    pub fn validate(&self) -> PlasmaResult<()> {
        let finite_fields = [
            ("major_radius", self.major_radius),
            ("minor_radius", self.minor_radius),
            ("elongation", self.elongation),
            ("triangularity", self.triangularity),
            ("shafranov_shift", self.shafranov_shift),
            ("pedestal_radius", self.pedestal_radius),
            ("ion_density_peaking_factor", self.ion_density_peaking_factor),
            ("ion_temperature_peaking_factor", self.ion_temperature_peaking_factor),
            ("ion_temperature_beta", self.ion_temperature_beta),
            ("min_toroidal_angle", self.min_toroidal_angle),
            ("max_toroidal_angle", self.max_toroidal_angle),
        ];
        for (name, value) in finite_fields {
            if !value.is_finite() {
                return Err(PlasmaError::ConfigError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.major_radius <= 0.0 {
            return Err(PlasmaError::ConfigError(format!(
                "major_radius must be > 0, got {}",
                self.major_radius
            )));
        }
        if self.minor_radius <= 0.0 {
            return Err(PlasmaError::ConfigError(format!(
                "minor_radius must be > 0, got {}",
                self.minor_radius
            )));
        }

        let magnitudes = [
            ("ion_density_origin", self.ion_density_origin),
            ("ion_density_pedestal", self.ion_density_pedestal),
            ("ion_density_separatrix", self.ion_density_separatrix),
            ("ion_temperature_origin", self.ion_temperature_origin),
            ("ion_temperature_pedestal", self.ion_temperature_pedestal),
            ("ion_temperature_separatrix", self.ion_temperature_separatrix),
        ];
        for (name, value) in magnitudes {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlasmaError::ConfigError(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }

        let exponents = [
            ("ion_density_peaking_factor", self.ion_density_peaking_factor),
            ("ion_temperature_peaking_factor", self.ion_temperature_peaking_factor),
            ("ion_temperature_beta", self.ion_temperature_beta),
        ];
        for (name, value) in exponents {
            if value < 0.0 {
                return Err(PlasmaError::ConfigError(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }

        if self.pedestal_radius < 0.0 || self.pedestal_radius > self.minor_radius {
            return Err(PlasmaError::ConfigError(format!(
                "pedestal_radius must lie in [0, minor_radius={}], got {}",
                self.minor_radius, self.pedestal_radius
            )));
        }
        if self.profile_mode() == ProfileMode::Pedestal && self.pedestal_radius == 0.0 {
            return Err(PlasmaError::ConfigError(
                "pedestal_radius must be > 0 for pedestal profiles".to_string(),
            ));
        }

        if self.number_of_bins == 0 {
            return Err(PlasmaError::ConfigError(
                "number_of_bins must be >= 1".to_string(),
            ));
        }

        // Label must survive the interchange record unchanged.
        if self.plasma_type.contains([',', '='])
            || self.plasma_type.trim() != self.plasma_type
        {
            return Err(PlasmaError::ConfigError(format!(
                "plasma_type must not contain ',' or '=' or surrounding whitespace: {:?}",
                self.plasma_type
            )));
        }

        if self.max_toroidal_angle <= self.min_toroidal_angle {
            return Err(PlasmaError::ConfigError(format!(
                "toroidal wedge is empty: min={} deg, max={} deg",
                self.min_toroidal_angle, self.max_toroidal_angle
            )));
        }

        Ok(())
    }
}
