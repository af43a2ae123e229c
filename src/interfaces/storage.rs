// ============================================================================
// Storage Interface
// Closed table of base integer types, plain scalar operands and real
// intermediates used by the fixed-point families
// ============================================================================

use super::classify::Classify;
use num_traits::{Float, PrimInt};
use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Integer storage type for [`Fixed`](crate::numeric::Fixed) and
/// [`Norm`](crate::numeric::Norm).
///
/// Sealed: the set of implementors is the fixed table of native signed and
/// unsigned integers from 8 to 128 bits. Every entry carries the type used
/// for overflow-safe multiply/divide (`Wide`) and the real type used for
/// float conversions and rounding (`Float`).
///
/// | Base   | Wide   | Float |
/// |--------|--------|-------|
/// | `i8`   | `i16`  | `f32` |
/// | `i16`  | `i32`  | `f32` |
/// | `i32`  | `i64`  | `f64` |
/// | `i64`  | `i128` | `f64` |
/// | `i128` | `i128` | `f64` |
///
/// Unsigned storage mirrors the table. The 128-bit entries widen to
/// themselves, so multiply/divide on them is not overflow-protected.
pub trait Base:
    sealed::Sealed + PrimInt + Hash + Debug + Default + Send + Sync + 'static
{
    /// Promotion type with at least double the range (itself for 128 bits).
    type Wide: Base;

    /// `f32` when `Wide` is narrower than 8 bytes, `f64` otherwise.
    type Float: Real;

    /// Storage width in bits.
    const BITS: u32;

    /// Whether the storage is a signed integer.
    const SIGNED: bool;

    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    /// Fractional bits of the conventional fixed-point split (half the width).
    const DEFAULT_OFFSET: u32 = Self::BITS / 2;

    /// Scale bits of the normalized encoding: width minus the sign bit.
    const NORM_OFFSET: u32;

    /// Smallest normalized base: `MIN + 1` for signed storage so the range
    /// is symmetric, `0` for unsigned storage.
    const NORM_MIN: Self;

    /// Exact promotion into the wide type.
    fn to_wide(self) -> Self::Wide;

    /// Two's complement truncation from the wide type.
    fn from_wide(wide: Self::Wide) -> Self;

    fn to_float(self) -> Self::Float;

    /// Float to wide conversion; saturates at the wide bounds, NaN maps to 0.
    fn float_to_wide(value: Self::Float) -> Self::Wide;

    /// Two's complement reinterpretation as `i128`.
    fn as_i128(self) -> i128;

    /// Two's complement truncation from `i128`.
    fn wrap_i128(value: i128) -> Self;

    fn wrap_add(self, rhs: Self) -> Self;
    fn wrap_sub(self, rhs: Self) -> Self;
    fn wrap_mul(self, rhs: Self) -> Self;
    fn wrap_neg(self) -> Self;

    /// Wrapping division. Panics when `rhs` is zero.
    fn wrap_div(self, rhs: Self) -> Self;

    /// Wrapping remainder. Panics when `rhs` is zero.
    fn wrap_rem(self, rhs: Self) -> Self;

    fn sat_add(self, rhs: Self) -> Self;
    fn sat_sub(self, rhs: Self) -> Self;
    fn sat_mul(self, rhs: Self) -> Self;

    /// Left shift; shifting by the full width or more yields zero.
    fn shl_or_zero(self, bits: u32) -> Self;

    /// Arithmetic right shift; shifting by the full width or more yields the
    /// sign fill (`-1` or `0`).
    fn shr_or_sign(self, bits: u32) -> Self;
}

macro_rules! impl_base {
    ($($t:ty => $wide:ty, $float:ty, $signed:expr;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Base for $t {
            type Wide = $wide;
            type Float = $float;

            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const NORM_OFFSET: u32 = <$t>::BITS - $signed as u32;
            const NORM_MIN: Self = <$t>::MIN + $signed as $t;

            #[inline]
            fn to_wide(self) -> $wide {
                self as $wide
            }

            #[inline]
            fn from_wide(wide: $wide) -> Self {
                wide as $t
            }

            #[inline]
            fn to_float(self) -> $float {
                self as $float
            }

            #[inline]
            fn float_to_wide(value: $float) -> $wide {
                value as $wide
            }

            #[inline]
            fn as_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn wrap_i128(value: i128) -> Self {
                value as $t
            }

            #[inline]
            fn wrap_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn wrap_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn wrap_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn wrap_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline]
            fn wrap_div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            #[inline]
            fn wrap_rem(self, rhs: Self) -> Self {
                self.wrapping_rem(rhs)
            }

            #[inline]
            fn sat_add(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            #[inline]
            fn sat_sub(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }

            #[inline]
            fn sat_mul(self, rhs: Self) -> Self {
                self.saturating_mul(rhs)
            }

            #[inline]
            fn shl_or_zero(self, bits: u32) -> Self {
                self.checked_shl(bits).unwrap_or(0)
            }

            #[inline]
            fn shr_or_sign(self, bits: u32) -> Self {
                // Two single-step shifts keep the sign fill for signed types
                // and clear the top bit for unsigned ones.
                self.checked_shr(bits)
                    .unwrap_or((self >> (<$t>::BITS - 1)) >> 1)
            }
        }
    )*};
}

impl_base! {
    i8 => i16, f32, true;
    i16 => i32, f32, true;
    i32 => i64, f64, true;
    i64 => i128, f64, true;
    i128 => i128, f64, true;
    u8 => u16, f32, false;
    u16 => u32, f32, false;
    u32 => u64, f64, false;
    u64 => u128, f64, false;
    u128 => u128, f64, false;
}

// ============================================================================
// Scalar Operands
// ============================================================================

/// A plain numeric value (primitive integer or float) that can be scaled into
/// or out of a fixed-point encoding.
///
/// Conversions follow `as` semantics: float to integer truncates toward zero
/// and saturates at the integer bounds.
pub trait Scalar: sealed::Sealed + Copy + Classify + 'static {
    fn into_f32(self) -> f32;
    fn into_f64(self) -> f64;
    fn from_f32(value: f32) -> Self;
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline]
            fn into_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn into_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f32(value: f32) -> Self {
                value as $t
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl sealed::Sealed for isize {}
impl sealed::Sealed for usize {}
impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}

// ============================================================================
// Real Intermediates
// ============================================================================

/// Floating-point intermediate used for conversions and rounding.
pub trait Real: Scalar + Float + Debug {
    const HALF: Self;

    /// Converts any scalar into this real type.
    fn of<S: Scalar>(value: S) -> Self;

    /// Converts this real into any scalar (`as` semantics).
    fn cast<S: Scalar>(self) -> S;

    /// `2^bits`, exact for every width in the storage table.
    fn pow2(bits: u32) -> Self;

    /// Rounding bias for round-half-away-from-zero: `+0.5` for non-negative
    /// values, `-0.5` otherwise.
    #[inline]
    fn bias(self) -> Self {
        if self >= <Self as num_traits::Zero>::zero() {
            Self::HALF
        } else {
            -Self::HALF
        }
    }
}

impl Real for f32 {
    const HALF: Self = 0.5;

    #[inline]
    fn of<S: Scalar>(value: S) -> Self {
        value.into_f32()
    }

    #[inline]
    fn cast<S: Scalar>(self) -> S {
        S::from_f32(self)
    }

    #[inline]
    fn pow2(bits: u32) -> Self {
        2.0f32.powi(bits as i32)
    }
}

impl Real for f64 {
    const HALF: Self = 0.5;

    #[inline]
    fn of<S: Scalar>(value: S) -> Self {
        value.into_f64()
    }

    #[inline]
    fn cast<S: Scalar>(self) -> S {
        S::from_f64(self)
    }

    #[inline]
    fn pow2(bits: u32) -> Self {
        2.0f64.powi(bits as i32)
    }
}
