// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Emission Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radial D-T neutron emission profile.
//!
//! The minor radius is split into `number_of_bins` equal bins. For bin `i`
//! the left edge `r_i = i · Δr` sets the local ion density `n(r_i)` and ion
//! temperature `T(r_i)`; the emission strength is `n² · ⟨σv⟩(T)`. The
//! strengths are accumulated and normalized into an inverse-CDF table.
//!
//! Units: r in meters, n in ions/m³, T in keV, ⟨σv⟩ in m³/s. The per-bin
//! energy width is `sqrt(T / 1000)`, i.e. the square root of T in MeV.

use ndarray::{Array1, ArrayView1};
use plasma_types::config::{PlasmaConfig, ProfileMode};
use plasma_types::constants::{BOSCH_HALE_DT, KEV_PER_MEV};
use plasma_types::error::{PlasmaError, PlasmaResult};
use tracing::debug;

/// Shape parameters of one pedestal-mode profile (density or temperature).
struct PedestalShape {
    origin: f64,
    pedestal: f64,
    separatrix: f64,
    /// Exponent on `r / r_ped` inside the pedestal.
    inner_exponent: f64,
    peaking: f64,
}

/// H-mode profile: peaked core for `r ≤ r_ped`, linear decay to the separatrix outside.
fn pedestal_profile(config: &PlasmaConfig, r: f64, shape: &PedestalShape) -> f64 {
    if r <= config.pedestal_radius {
        let core = (1.0 - (r / config.pedestal_radius).powf(shape.inner_exponent))
            .powf(shape.peaking);
        shape.pedestal + (shape.origin - shape.pedestal) * core
    } else {
        let edge_fraction =
            (config.minor_radius - r) / (config.minor_radius - config.pedestal_radius);
        shape.separatrix + (shape.pedestal - shape.separatrix) * edge_fraction
    }
}

/// Ion density [ions/m³] at minor radius `r` [m].
pub fn ion_density(config: &PlasmaConfig, r: f64) -> f64 {
    match config.profile_mode() {
        ProfileMode::Parabolic => {
            config.ion_density_origin * (1.0 - (r / config.minor_radius).powi(2))
        }
        ProfileMode::Pedestal => pedestal_profile(
            config,
            r,
            &PedestalShape {
                origin: config.ion_density_origin,
                pedestal: config.ion_density_pedestal,
                separatrix: config.ion_density_separatrix,
                inner_exponent: 2.0,
                peaking: config.ion_density_peaking_factor,
            },
        ),
    }
}

/// Ion temperature [keV] at minor radius `r` [m].
///
/// The parabolic profile raises `r / a` straight to the peaking factor;
/// `ion_temperature_beta` only enters the pedestal core term.
pub fn ion_temperature(config: &PlasmaConfig, r: f64) -> f64 {
    match config.profile_mode() {
        ProfileMode::Parabolic => {
            config.ion_temperature_origin
                * (1.0 - (r / config.minor_radius).powf(config.ion_temperature_peaking_factor))
        }
        ProfileMode::Pedestal => pedestal_profile(
            config,
            r,
            &PedestalShape {
                origin: config.ion_temperature_origin,
                pedestal: config.ion_temperature_pedestal,
                separatrix: config.ion_temperature_separatrix,
                inner_exponent: config.ion_temperature_beta,
                peaking: config.ion_temperature_peaking_factor,
            },
        ),
    }
}

/// Bosch-Hale D-T fusion reactivity ⟨σv⟩ in m³/s for ion temperature `t_kev`.
///
/// Fails for non-positive or non-finite temperatures instead of returning NaN.
pub fn dt_reactivity(t_kev: f64) -> PlasmaResult<f64> {
    if !t_kev.is_finite() || t_kev <= 0.0 {
        return Err(PlasmaError::PhysicsViolation(format!(
            "D-T reactivity requires a finite temperature > 0 keV, got {t_kev}"
        )));
    }
    let c = BOSCH_HALE_DT;
    let u = 1.0 - t_kev * (c[2] + t_kev * (c[3] - c[4] * t_kev))
        / (1.0 + t_kev * (c[5] + c[6] * t_kev));
    if !u.is_finite() || u <= 0.0 {
        return Err(PlasmaError::PhysicsViolation(format!(
            "D-T reactivity fit left its domain at T={t_kev} keV (u={u})"
        )));
    }

    let rate = c[0] / (u.powf(5.0 / 6.0) * t_kev.powf(2.0 / 3.0))
        * (-c[1] * (u / t_kev).powf(1.0 / 3.0)).exp();
    if !rate.is_finite() {
        return Err(PlasmaError::PhysicsViolation(format!(
            "D-T reactivity became non-finite at T={t_kev} keV"
        )));
    }
    Ok(rate)
}

/// Discretized emission profile. Immutable once built.
#[derive(Debug, Clone)]
pub struct PlasmaProfile {
    bin_width: f64,
    cumulative: Array1<f64>,
    bin_energy_width: Array1<f64>,
}

impl PlasmaProfile {
    /// Build the normalized cumulative emission table for `config`.
    ///
    /// Algorithm:
    /// 1. `r_i = i · Δr`, `Δr = a / N`
    /// 2. `s_i = n(r_i)² · ⟨σv⟩(T(r_i))`
    /// 3. `C_i = Σ_{j≤i} s_j / Σ s`
    /// 4. `w_i = sqrt(T(r_i) / 1000)`
    ///
    /// The running sum that yields `C_{N-1}` is the normalization itself, so the
    /// last entry is exactly 1.0.
    pub fn build(config: &PlasmaConfig) -> PlasmaResult<Self> {
        config.validate()?;

        let n = config.number_of_bins;
        let bin_width = config.minor_radius / n as f64;

        let mut cumulative = Array1::zeros(n);
        let mut bin_energy_width = Array1::zeros(n);
        let mut running = 0.0_f64;

        for i in 0..n {
            let r = bin_width * i as f64;
            let density = ion_density(config, r);
            let temperature = ion_temperature(config, r);
            let reactivity = dt_reactivity(temperature).map_err(|e| {
                PlasmaError::ConfigError(format!("emission bin {i} at r={r} m: {e}"))
            })?;

            running += density.powi(2) * reactivity;
            cumulative[i] = running;
            bin_energy_width[i] = (temperature / KEV_PER_MEV).sqrt();
        }

        let total = running;
        if !total.is_finite() || total <= 0.0 {
            return Err(PlasmaError::ConfigError(format!(
                "total emission strength must be finite and > 0, got {total}"
            )));
        }
        cumulative.mapv_inplace(|v| v / total);

        debug!(
            bins = n,
            bin_width_m = bin_width,
            total_strength = total,
            "built plasma emission profile"
        );

        Ok(PlasmaProfile {
            bin_width,
            cumulative,
            bin_energy_width,
        })
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn number_of_bins(&self) -> usize {
        self.cumulative.len()
    }

    /// Normalized cumulative emission by radial bin; non-decreasing, ends at 1.0.
    pub fn cumulative_profile(&self) -> ArrayView1<'_, f64> {
        self.cumulative.view()
    }

    /// Per-bin energy spread scale, sqrt(MeV).
    pub fn bin_energy_width(&self) -> ArrayView1<'_, f64> {
        self.bin_energy_width.view()
    }
}
