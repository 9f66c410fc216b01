// Scalar width abstraction for the codec's arithmetic.
//
// The reference implementation leaves the width of `punycode_uint` to a
// compile-time typedef; here it is a type parameter instead, so one build can
// hold several widths side by side.  The codec's `Overflow` status is defined
// relative to this width: inputs that overflow u16 arithmetic succeed
// unchanged under u32, and agreeing widths produce identical output.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// Unsigned integer carrying code points and the codec's internal state
/// (`n`, `delta`, `i`, `w`, `bias`).
///
/// RFC 3492 requires at least 26 usable bits for full Unicode coverage.
/// The `u16` impl is intentionally narrower: it exists to surface the
/// `Overflow` paths that a 32-bit build never reaches.
pub trait CodePoint:
    Copy
    + Eq
    + Ord
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Widen a small value (Bootstring parameters, digit values, basic code
    /// points; all below 0x800).  Must fit the target width; every call site
    /// guarantees it.
    fn from_u32(v: u32) -> Self;

    /// Narrow a value known to be small (digit values, basic code points).
    fn to_u32(self) -> u32;

    /// Convert a count or index; `None` if it exceeds this width.
    fn from_usize(v: usize) -> Option<Self>;

    /// Convert to an index, saturating at `usize::MAX`.  Call sites only use
    /// this on values bounded by a buffer length.
    fn to_usize(self) -> usize;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_code_point {
    ($($ty:ty),*) => {$(
        impl CodePoint for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$ty>::MAX;

            #[inline]
            fn from_u32(v: u32) -> Self {
                v as $ty
            }

            #[inline]
            fn to_u32(self) -> u32 {
                self as u32
            }

            #[inline]
            fn from_usize(v: usize) -> Option<Self> {
                Self::try_from(v).ok()
            }

            #[inline]
            fn to_usize(self) -> usize {
                usize::try_from(self).unwrap_or(usize::MAX)
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_mul(self, rhs)
            }
        }
    )*};
}

impl_code_point!(u16, u32, u64, u128);
