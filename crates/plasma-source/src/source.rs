// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Parametric D-T Plasma Neutron Source
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Neutron birth-event sampler.
//!
//! Eight uniform draws are consumed in a fixed order:
//!   u1, u2 → radial bin and offset
//!   u3     → poloidal angle
//!   u4     → toroidal angle
//!   u5, u6 → energy broadening
//!   u7, u8 → emission direction
//!
//! Lengths are meters, energies MeV. See [`SampleEvent::to_host_units`] for
//! the transport-host convention (cm, eV).

use plasma_types::config::PlasmaConfig;
use plasma_types::error::{PlasmaError, PlasmaResult};
use plasma_types::event::SampleEvent;
use plasma_types::interchange::parse_config;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::info;

use crate::direction::isotropic_direction;
use crate::energy::sample_energy;
use crate::geometry::{poloidal_position, ToroidalWedge};
use crate::profile::{self, PlasmaProfile};
use crate::radial::sample_radial;

/// Number of uniform draws consumed per event.
pub const RANDOMS_PER_EVENT: usize = 8;

/// Index of the draw feeding the logarithm in the energy sampler.
const LOG_DRAW_INDEX: usize = 4;

/// A validated plasma with its emission profile, ready to sample.
#[derive(Debug, Clone)]
pub struct PlasmaSource {
    config: PlasmaConfig,
    profile: PlasmaProfile,
    wedge: ToroidalWedge,
}

impl PlasmaSource {
    pub fn new(config: PlasmaConfig) -> PlasmaResult<Self> {
        let profile = PlasmaProfile::build(&config)?;
        let wedge = ToroidalWedge::from_degrees(config.min_toroidal_angle, config.max_toroidal_angle);

        info!(
            plasma_type = %config.plasma_type,
            mode = ?config.profile_mode(),
            bins = profile.number_of_bins(),
            major_radius_m = config.major_radius,
            minor_radius_m = config.minor_radius,
            "plasma source ready"
        );

        Ok(PlasmaSource {
            config,
            profile,
            wedge,
        })
    }

    /// Load a JSON configuration file and build the source.
    pub fn from_file(path: &str) -> PlasmaResult<Self> {
        Self::new(PlasmaConfig::from_file(path)?)
    }

    /// Build from a `schema_version=1, key=value, ...` record.
    pub fn from_interchange(record: &str) -> PlasmaResult<Self> {
        Self::new(parse_config(record)?)
    }

    pub fn config(&self) -> &PlasmaConfig {
        &self.config
    }

    pub fn profile(&self) -> &PlasmaProfile {
        &self.profile
    }

    pub fn wedge(&self) -> ToroidalWedge {
        self.wedge
    }

    /// Ion density [m⁻³] at minor radius `r` [m].
    pub fn ion_density(&self, r: f64) -> f64 {
        profile::ion_density(&self.config, r)
    }

    /// Ion temperature [keV] at minor radius `r` [m].
    pub fn ion_temperature(&self, r: f64) -> f64 {
        profile::ion_temperature(&self.config, r)
    }

    /// Sample one birth event from eight uniform draws.
    pub fn sample(&self, randoms: [f64; RANDOMS_PER_EVENT]) -> PlasmaResult<SampleEvent> {
        check_randoms(&randoms)?;
        let [u1, u2, u3, u4, u5, u6, u7, u8] = randoms;

        let radial = sample_radial(&self.profile, u1, u2)?;
        let (r, z) = poloidal_position(&self.config, radial.radius, u3);
        let (x, y) = self.wedge.to_xy(r, u4);
        let energy_mev = sample_energy(&self.profile, radial.bin, u5, u6)?;
        let direction = isotropic_direction(u7, u8);

        Ok(SampleEvent {
            position: [x, y, z],
            direction,
            energy_mev,
        })
    }

    /// Sample one event drawing its randoms from `rng`.
    ///
    /// A zero draw for the logarithm argument is redrawn.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> PlasmaResult<SampleEvent> {
        let mut randoms = [0.0; RANDOMS_PER_EVENT];
        for (index, slot) in randoms.iter_mut().enumerate() {
            let mut u: f64 = rng.gen();
            while index == LOG_DRAW_INDEX && u == 0.0 {
                u = rng.gen();
            }
            *slot = u;
        }
        self.sample(randoms)
    }

    /// Sample `n` events in parallel. Event `k` uses its own stream seeded
    /// with `seed + k`, so the output does not depend on the thread count.
    pub fn sample_batch(&self, n: usize, seed: u64) -> PlasmaResult<Vec<SampleEvent>> {
        info!(particles = n, seed, "sampling neutron source batch");
        (0..n)
            .into_par_iter()
            .map(|k| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(k as u64));
                self.sample_with_rng(&mut rng)
            })
            .collect()
    }
}

fn check_randoms(randoms: &[f64; RANDOMS_PER_EVENT]) -> PlasmaResult<()> {
    for (index, &value) in randoms.iter().enumerate() {
        let in_domain = if index == LOG_DRAW_INDEX {
            value > 0.0 && value <= 1.0
        } else {
            (0.0..1.0).contains(&value)
        };
        if !in_domain {
            return Err(PlasmaError::InputDomain { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MID: [f64; 8] = [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5];

    fn source() -> PlasmaSource {
        PlasmaSource::new(PlasmaConfig::default()).unwrap()
    }

    #[test]
    fn test_source_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlasmaSource>();
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = PlasmaConfig {
            minor_radius: -1.0,
            ..PlasmaConfig::default()
        };
        assert!(matches!(
            PlasmaSource::new(cfg),
            Err(PlasmaError::ConfigError(_))
        ));
    }

    #[test]
    fn test_sample_is_deterministic() {
        let s = source();
        let a = s.sample(MID).unwrap();
        let b = s.sample(MID).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_domain_reports_index() {
        let s = source();
        for (index, bad) in [(0, 1.0), (3, -0.1), (7, f64::NAN), (4, 0.0), (4, 1.5)] {
            let mut randoms = MID;
            randoms[index] = bad;
            match s.sample(randoms) {
                Err(PlasmaError::InputDomain { index: i, value }) => {
                    assert_eq!(i, index);
                    assert!(value.to_bits() == bad.to_bits());
                }
                other => panic!("expected InputDomain for index {index}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_log_draw_accepts_one() {
        let s = source();
        let mut randoms = MID;
        randoms[LOG_DRAW_INDEX] = 1.0;
        let event = s.sample(randoms).unwrap();
        assert_eq!(event.energy_mev, plasma_types::constants::DT_NEUTRON_ENERGY_MEV);
    }

    #[test]
    fn test_direction_is_unit() {
        let s = source();
        let d = s.sample([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]).unwrap().direction;
        let n = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        assert!((n - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_wedge_confines_position() {
        let cfg = PlasmaConfig {
            min_toroidal_angle: 10.0,
            max_toroidal_angle: 40.0,
            ..PlasmaConfig::default()
        };
        let s = PlasmaSource::new(cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let e = s.sample_with_rng(&mut rng).unwrap();
            let phi = e.position[0].atan2(e.position[1]);
            assert!(
                phi >= s.wedge().min_rad() - 1e-12 && phi <= s.wedge().max_rad() + 1e-12,
                "phi {phi}"
            );
        }
    }

    #[test]
    fn test_probes_match_profile_functions() {
        let s = source();
        assert_eq!(s.ion_density(0.3), profile::ion_density(s.config(), 0.3));
        assert_eq!(
            s.ion_temperature(1.1),
            profile::ion_temperature(s.config(), 1.1)
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let s = source();
        let expected = s.sample(MID).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| s.sample(MID).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_batch_matches_sequential() {
        let s = source();
        let batch = s.sample_batch(64, 2024).unwrap();
        assert_eq!(batch.len(), 64);
        for (k, event) in batch.iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(2024 + k as u64);
            assert_eq!(*event, s.sample_with_rng(&mut rng).unwrap());
        }
    }

    #[test]
    fn test_interchange_construction_matches_direct() {
        let cfg = PlasmaConfig::default();
        let direct = PlasmaSource::new(cfg.clone()).unwrap();
        let parsed = PlasmaSource::from_interchange(&cfg.to_interchange()).unwrap();
        assert_eq!(direct.sample(MID).unwrap(), parsed.sample(MID).unwrap());
    }
}
