// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Neutron Birth Events
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{CM_PER_M, EV_PER_MEV};

/// One sampled neutron birth event.
/// Position in meters, direction as a unit vector, energy in MeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleEvent {
    pub position: [f64; 3],
    pub direction: [f64; 3],
    pub energy_mev: f64,
}

impl SampleEvent {
    /// `(x, y, z, u, v, w, E)`.
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.position[0],
            self.position[1],
            self.position[2],
            self.direction[0],
            self.direction[1],
            self.direction[2],
            self.energy_mev,
        ]
    }

    /// Convert to transport-host units (cm, eV), unit weight.
    pub fn to_host_units(&self) -> HostParticle {
        HostParticle {
            position_cm: [
                self.position[0] * CM_PER_M,
                self.position[1] * CM_PER_M,
                self.position[2] * CM_PER_M,
            ],
            direction: self.direction,
            energy_ev: self.energy_mev * EV_PER_MEV,
            weight: 1.0,
        }
    }
}

/// Neutron source particle as handed to a transport host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HostParticle {
    pub position_cm: [f64; 3],
    pub direction: [f64; 3],
    pub energy_ev: f64,
    pub weight: f64,
}
