//! Resolution handling
//!
//! A sphere's resolution is expressed the way circle-based CAD tools express
//! it: as a number of fragments (sides) a full circle at that radius should
//! have. The octahedron construction can only produce equators with `4·2^n`
//! sides, so the fragment count is snapped to the nearest such `n`.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Radii below this collapse to the minimum fragment count
pub const GRID_FINE: f64 = 0.000_000_953_674_316_406_25;

/// Smallest fragment count the angular rule ever produces for a real radius
const MIN_ANGULAR_FRAGMENTS: f64 = 5.0;

/// How finely a circle (and therefore the sphere's equator) is divided
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Use exactly this many fragments as the hint
    Fragments(f64),
    /// Derive fragments from a minimum angle (degrees) and a minimum
    /// fragment length, whichever gives fewer fragments
    Angular {
        /// Minimum angle per fragment in degrees
        min_angle: f64,
        /// Minimum fragment edge length in world units
        min_size: f64,
    },
}

impl Resolution {
    /// Fragment count hint for a circle of the given radius
    ///
    /// ```
    /// use octsphere::Resolution;
    ///
    /// assert_eq!(Resolution::Fragments(32.0).fragments(10.0), 32.0);
    /// assert_eq!(Resolution::default().fragments(1.0), 5.0);
    /// ```
    pub fn fragments(self, radius: f64) -> f64 {
        match self {
            Resolution::Fragments(n) => n,
            Resolution::Angular { min_angle, min_size } => {
                if radius < GRID_FINE {
                    return 3.0;
                }
                let by_angle = 360.0 / min_angle;
                let by_size = radius * 2.0 * PI / min_size;
                by_angle.min(by_size).max(MIN_ANGULAR_FRAGMENTS).ceil()
            }
        }
    }

    /// Subdivision level this resolution selects at the given radius
    pub fn levels(self, radius: f64) -> u32 {
        select_levels(self.fragments(radius))
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Angular {
            min_angle: 12.0,
            min_size: 2.0,
        }
    }
}

/// Number of sides of the equator polygon after `levels` subdivision passes
#[inline]
pub fn equator_sides(levels: u32) -> usize {
    4 << levels
}

/// Pick the subdivision level whose equator side count `4·2^levels` is
/// closest to `fragments`
///
/// Both neighbouring levels of `log2(fragments / 4)` are considered, clamped
/// at zero; on an exact tie the higher level wins, so 12 fragments give a
/// 16-sided equator rather than 8. The hint must be positive and finite.
///
/// ```
/// use octsphere::select_levels;
///
/// assert_eq!(select_levels(10.0), 1);
/// assert_eq!(select_levels(12.0), 2);
/// assert_eq!(select_levels(4.0), 0);
/// ```
pub fn select_levels(fragments: f64) -> u32 {
    let pn = (fragments / 4.0).log2();
    let lower = pn.floor().max(0.0) as u32;
    let upper = pn.ceil().max(0.0) as u32;

    let miss = |levels: u32| (4.0 * 2f64.powi(levels as i32) - fragments).abs();
    let levels = if miss(upper) <= miss(lower) { upper } else { lower };

    debug!("fragments {} -> {} subdivision levels", fragments, levels);
    levels
}
