//! Isotropic emission direction.
//!
//!   t = 2π u7,  p = acos(1 − 2 u8)
//!   (u, v, w) = (sin p · cos t, sin p · sin t, cos p)

use std::f64::consts::TAU;

/// Unit vector drawn uniformly over the sphere.
pub fn isotropic_direction(u7: f64, u8: f64) -> [f64; 3] {
    let t = TAU * u7;
    let p = (1.0 - 2.0 * u8).acos();
    let (sin_p, cos_p) = p.sin_cos();
    [sin_p * t.cos(), sin_p * t.sin(), cos_p]
}
