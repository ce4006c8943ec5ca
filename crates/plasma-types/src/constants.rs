// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Bosch-Hale D-T reactivity fit coefficients `c[0..7]`, T in keV, ⟨σv⟩ in m³/s.
pub const BOSCH_HALE_DT: [f64; 7] = [
    2.5663271e-18,
    19.983026,
    2.5077133e-2,
    2.5773408e-3,
    6.1880463e-5,
    6.6024089e-2,
    8.1215505e-3,
];

/// Mean D-T fusion neutron birth energy (MeV).
pub const DT_NEUTRON_ENERGY_MEV: f64 = 14.08;

/// Thermal broadening factor: FWHM coefficient 5.59 divided by the
/// FWHM-to-sigma ratio 2.35.
pub const DT_BROADENING_SCALE: f64 = 5.59 / 2.35;

/// keV → MeV.
pub const KEV_PER_MEV: f64 = 1000.0;

/// 2π truncated to 11 decimals. Used for the poloidal angle and the
/// Box-Muller cosine; published source fixtures are generated with it.
pub const REFERENCE_TWO_PI: f64 = 6.28318530718;

/// Transport hosts work in centimeters.
pub const CM_PER_M: f64 = 100.0;

/// Transport hosts work in eV.
pub const EV_PER_MEV: f64 = 1.0e6;
