// Bootstring parameters for Punycode (RFC 3492, Section 5).
//
// These are the fixed values that instantiate the generalized Bootstring
// algorithm as Punycode.  The codec in this crate is hard-wired to them;
// it does not accept alternative parameter sets.

/// Base of the digit alphabet (a-z + 0-9).
pub const BASE: u32 = 36;
/// Minimum per-position threshold.
pub const TMIN: u32 = 1;
/// Maximum per-position threshold.
pub const TMAX: u32 = 26;
/// Skew term of the bias adaptation.
pub const SKEW: u32 = 38;
/// Damping divisor applied to the very first delta.
pub const DAMP: u32 = 700;
/// Bias before the first adaptation.
pub const INITIAL_BIAS: u32 = 72;
/// First non-basic code point; everything below is emitted literally.
pub const INITIAL_N: u32 = 0x80;
/// Separates the literal basic prefix from the digit-encoded suffix.
pub const DELIMITER: u8 = 0x2D; // '-'

// Bootstring validity conditions (RFC 3492, Section 4).  A parameter set
// violating any of these cannot round-trip.
const _: () = {
    assert!(TMIN <= TMAX && TMAX < BASE);
    assert!(SKEW >= 1);
    assert!(DAMP >= 2);
    assert!(INITIAL_BIAS % BASE <= BASE - TMIN);
};
