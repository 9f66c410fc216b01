// Bias adaptation (RFC 3492, Section 6.1).
//
// The bias decides how many digits each delta costs.  After every encoded or
// decoded value it is recomputed from the delta just processed and the number
// of code points handled so far.  Test vectors depend on the exact truncating
// integer divisions below; do not "simplify" them.

use super::params::{BASE, DAMP, SKEW, TMAX, TMIN};
use super::scalar::CodePoint;

/// Recompute the bias after processing `delta`.
///
/// `num_points` counts the code points handled so far including the one this
/// delta produced; `first_time` applies the stronger damping to the very
/// first adaptation.  Pure function of its arguments.
pub fn adapt<C: CodePoint>(delta: C, num_points: C, first_time: bool) -> C {
    let base = C::from_u32(BASE);
    let mut delta = if first_time {
        delta / C::from_u32(DAMP)
    } else {
        delta / C::from_u32(2)
    };
    delta = delta + delta / num_points;

    let limit = C::from_u32(((BASE - TMIN) * TMAX) / 2);
    let mut k = C::ZERO;
    while delta > limit {
        delta = delta / (base - C::from_u32(TMIN));
        k = k + base;
    }

    k + (base - C::from_u32(TMIN) + C::ONE) * delta / (delta + C::from_u32(SKEW))
}

/// Threshold for digit position `k` under the current bias:
/// `clamp(k - bias, TMIN, TMAX)`.
#[inline]
pub fn threshold<C: CodePoint>(k: C, bias: C) -> C {
    if k <= bias {
        C::from_u32(TMIN)
    } else if k >= bias + C::from_u32(TMAX) {
        C::from_u32(TMAX)
    } else {
        k - bias
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
