//! Parametric D-T plasma neutron source.
//!
//! Profile builder: ion density and temperature shapes, Bosch-Hale reactivity,
//! normalized cumulative emission table.
//! Event sampler: radial bin, flux-surface geometry, energy broadening,
//! isotropic direction.

pub mod direction;
pub mod energy;
pub mod geometry;
pub mod profile;
pub mod radial;
pub mod source;
