//! Inverse-CDF sampling of the minor radius.
//!
//! The bin is the first index whose cumulative value bounds `u1` from above
//! (`u1 ≤ C_i`, lower-bound semantics). Small tables are scanned linearly;
//! larger ones use a binary search with the same tie-breaking.

use ndarray::ArrayView1;
use plasma_types::error::{PlasmaError, PlasmaResult};

use crate::profile::PlasmaProfile;

/// Tables up to this many bins are scanned linearly.
pub const LINEAR_SCAN_MAX_BINS: usize = 128;

/// Sampled minor radius [m] and the emission bin it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSample {
    pub radius: f64,
    pub bin: usize,
}

/// First `i` with `u1 <= cumulative[i]`, scanning from the axis outwards.
pub fn linear_scan(cumulative: ArrayView1<'_, f64>, u1: f64) -> Option<usize> {
    cumulative.iter().position(|&c| u1 <= c)
}

/// Lower-bound binary search over a non-decreasing table.
pub fn binary_search(cumulative: ArrayView1<'_, f64>, u1: f64) -> Option<usize> {
    let (mut lo, mut hi) = (0, cumulative.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cumulative[mid] < u1 {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    (lo < cumulative.len() && u1 <= cumulative[lo]).then_some(lo)
}

pub fn locate_bin(cumulative: ArrayView1<'_, f64>, u1: f64) -> Option<usize> {
    if cumulative.len() <= LINEAR_SCAN_MAX_BINS {
        linear_scan(cumulative, u1)
    } else {
        binary_search(cumulative, u1)
    }
}

/// Draw a minor radius from `profile` using `u1` for the bin and `u2` for the
/// offset inside it.
///
/// For bin `i > 0` the offset starts at the left edge of bin `i - 1`; bin 0
/// starts at the magnetic axis.
pub fn sample_radial(profile: &PlasmaProfile, u1: f64, u2: f64) -> PlasmaResult<RadialSample> {
    let bin = locate_bin(profile.cumulative_profile(), u1).ok_or(PlasmaError::SamplingDomain {
        u1,
        bins: profile.number_of_bins(),
    })?;

    let width = profile.bin_width();
    let radius = if bin > 0 {
        (bin - 1) as f64 * width + width * u2
    } else {
        width * u2
    };

    Ok(RadialSample { radius, bin })
}
