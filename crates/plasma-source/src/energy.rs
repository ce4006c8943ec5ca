// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Neutron Energy Broadening
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thermal Doppler broadening of the 14.08 MeV D-T line.
//!
//!   g = sqrt(−2 ln u5) · cos(2π u6)
//!   E = (5.59 / 2.35) · w_bin · g + 14.08   [MeV]
//!
//! `w_bin = sqrt(T_bin / 1000)` with T in keV, precomputed per radial bin.

use plasma_types::constants::{DT_BROADENING_SCALE, DT_NEUTRON_ENERGY_MEV, REFERENCE_TWO_PI};
use plasma_types::error::{PlasmaError, PlasmaResult};

use crate::profile::PlasmaProfile;

/// Neutron birth energy [MeV] for emission bin `bin`.
pub fn sample_energy(profile: &PlasmaProfile, bin: usize, u5: f64, u6: f64) -> PlasmaResult<f64> {
    let width = profile.bin_energy_width().get(bin).copied().ok_or_else(|| {
        PlasmaError::PhysicsViolation(format!(
            "energy bin {bin} outside profile of {} bins",
            profile.number_of_bins()
        ))
    })?;

    // Box–Muller, one deviate; u5 must lie in (0, 1]
    let spread = (-2.0 * u5.ln()).sqrt();
    let phase = (REFERENCE_TWO_PI * u6).cos();
    Ok(DT_BROADENING_SCALE * width * spread * phase + DT_NEUTRON_ENERGY_MEV)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasma_types::config::PlasmaConfig;

    fn gaussian_draw(u5: f64, u6: f64) -> f64 {
        (-2.0 * u5.ln()).sqrt() * (REFERENCE_TWO_PI * u6).cos()
    }

    fn profile() -> PlasmaProfile {
        PlasmaProfile::build(&PlasmaConfig::default()).unwrap()
    }

    #[test]
    fn test_unit_draw_gives_line_centre() {
        // ln(1) = 0 removes the spread entirely
        let p = profile();
        for bin in [0, 50, 99] {
            let e = sample_energy(&p, bin, 1.0, 0.3).unwrap();
            assert_eq!(e, DT_NEUTRON_ENERGY_MEV);
        }
    }

    #[test]
    fn test_quarter_phase_is_near_centre() {
        let p = profile();
        let e = sample_energy(&p, 10, 0.2, 0.25).unwrap();
        assert!((e - DT_NEUTRON_ENERGY_MEV).abs() < 1e-9, "E = {e}");
    }

    #[test]
    fn test_hot_core_broadens_more_than_edge() {
        let p = profile();
        let core = sample_energy(&p, 0, 0.1, 0.0).unwrap() - DT_NEUTRON_ENERGY_MEV;
        let edge = sample_energy(&p, 99, 0.1, 0.0).unwrap() - DT_NEUTRON_ENERGY_MEV;
        assert!(core > edge && edge > 0.0, "core {core}, edge {edge}");
    }

    #[test]
    fn test_matches_gaussian_draw() {
        let p = profile();
        let (u5, u6) = (0.37, 0.81);
        let w = p.bin_energy_width()[7];
        let expected = DT_BROADENING_SCALE * w * gaussian_draw(u5, u6) + DT_NEUTRON_ENERGY_MEV;
        let got = sample_energy(&p, 7, u5, u6).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn test_gaussian_draw_moments() {
        let n = 200;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for i in 0..n {
            for j in 0..n {
                let g = gaussian_draw((i as f64 + 0.5) / n as f64, (j as f64 + 0.5) / n as f64);
                sum += g;
                sum_sq += g * g;
            }
        }
        let count = (n * n) as f64;
        let mean = sum / count;
        let var = sum_sq / count - mean * mean;
        assert!(mean.abs() < 1e-3, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }

    #[test]
    fn test_bin_out_of_range() {
        let p = profile();
        let err = sample_energy(&p, 100, 0.5, 0.5).unwrap_err();
        assert!(matches!(err, PlasmaError::PhysicsViolation(_)));
    }
}
