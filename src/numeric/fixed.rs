// ============================================================================
// Fixed-Point Number
// Binary fixed-point over any integer storage with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::family::{rescale_raw, same_instantiation, Family, FixedPointFamily};
use crate::interfaces::{Base, Classify, Real, Scalar, Widen};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Float as _};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Binary fixed-point number with compile-time precision.
///
/// Stores `value × 2^FRAC` in the base integer `B`.
///
/// # Type Parameters
/// - `B`: storage integer (`i8..i128`, `u8..u128`)
/// - `FRAC`: number of fractional bits, at most the storage width. The
///   conventional split is half the width ([`Base::DEFAULT_OFFSET`]), which
///   the [`Fixed8`]..[`UFixed64`] aliases use.
///
/// # Semantics
/// - Construction from a scalar rounds half away from zero and wraps when
///   the result does not fit the storage.
/// - Add, subtract, negate and narrowing wrap like the storage integer.
/// - Multiply and divide run in the wide type, so the intermediate product
///   or shifted dividend cannot overflow (except on 128-bit storage).
/// - Division or remainder by a zero base panics.
/// - Comparisons are exact integer comparisons of the bases.
///
/// # Example
/// ```
/// use fixnorm::numeric::{Fixed, Fixed16};
///
/// let a = Fixed::<i8, 4>::from_real(1.5f32);
/// assert_eq!(a.base, 24);
///
/// let b = Fixed16::from_real(2.25f32) * Fixed16::from_real(1.5f32);
/// assert_eq!(b.to_real(), 3.375);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fixed<B: Base, const FRAC: u32> {
    /// Raw encoded value (`value × 2^FRAC`).
    pub base: B,
}

impl<B: Base, const FRAC: u32> Fixed<B, FRAC> {
    const VALID_OFFSET: () = assert!(
        FRAC <= B::BITS,
        "fractional bits exceed the storage width"
    );

    /// Number of fractional bits
    pub const OFFSET: u32 = FRAC;

    /// Largest raw base
    pub const MAX_BASE: B = B::MAX;

    /// Smallest raw base
    pub const MIN_BASE: B = B::MIN;

    /// Zero value
    pub const ZERO: Self = Self::from_base(B::ZERO);

    /// Maximum representable value
    pub const MAX: Self = Self::from_base(B::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self::from_base(B::MIN);

    /// Smallest positive step (base of one)
    pub const EPSILON: Self = Self::from_base(B::ONE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from the raw encoded base.
    #[inline]
    pub const fn from_base(base: B) -> Self {
        let () = Self::VALID_OFFSET;
        Self { base }
    }

    /// Create from any integer or float value.
    ///
    /// Computes `value × 2^FRAC ± 0.5` in the float type and truncates,
    /// which rounds half away from zero. Out-of-range values wrap.
    #[inline]
    pub fn from_real<S: Scalar>(value: S) -> Self {
        let value = <B::Float as Real>::of(value);
        let scaled = value * Self::scale() + value.bias();
        Self::from_base(B::from_wide(B::float_to_wide(scaled)))
    }

    /// Replace the value with a scalar, using the [`from_real`](Self::from_real)
    /// rules.
    #[inline]
    pub fn assign<S: Scalar>(&mut self, value: S) -> &mut Self {
        *self = Self::from_real(value);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw encoded base.
    #[inline]
    pub fn to_base(self) -> B {
        self.base
    }

    /// Get the value in the float type (`base / 2^FRAC`).
    #[inline]
    pub fn to_real(self) -> B::Float {
        self.base.to_float() / Self::scale()
    }

    /// Convert to any integer or float scalar (`as` semantics from the real
    /// value, so integers truncate toward zero).
    #[inline]
    pub fn to<S: Scalar>(self) -> S {
        self.to_real().cast()
    }

    /// Convert into another fixed-point family member.
    ///
    /// Same instantiation: exact copy. Other `Fixed` instantiations: integer
    /// re-scaling. `Norm` targets: through the real value.
    #[inline]
    pub fn convert<T: FixedPointFamily>(self) -> T {
        T::from_family(self)
    }

    /// The scale factor `2^FRAC` in the wide type.
    #[inline]
    pub fn correction() -> B::Wide {
        <B::Wide as Base>::ONE.shl_or_zero(FRAC)
    }

    /// The real value of one base step (`2^-FRAC`).
    #[inline]
    pub fn epsilon() -> B::Float {
        Self::scale().recip()
    }

    /// Largest representable real value.
    #[inline]
    pub fn max_value() -> B::Float {
        Self::MAX.to_real()
    }

    /// Smallest representable real value.
    #[inline]
    pub fn min_value() -> B::Float {
        Self::MIN.to_real()
    }

    #[inline]
    fn scale() -> B::Float {
        <B::Float as Real>::pow2(FRAC)
    }

    #[inline]
    fn mul_base(self, rhs: B) -> B {
        let product = self.base.to_wide().wrap_mul(rhs.to_wide());
        B::from_wide(product.shr_or_sign(FRAC))
    }

    #[inline]
    fn div_base(self, rhs: B) -> B {
        let dividend = self.base.to_wide().shl_or_zero(FRAC);
        B::from_wide(dividend.wrap_div(rhs.to_wide()))
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.base
            .checked_add(&rhs.base)
            .map(Self::from_base)
            .ok_or_else(|| {
                let error = if rhs.base > B::ZERO {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                };
                Self::report("add", self, rhs, error)
            })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.base
            .checked_sub(&rhs.base)
            .map(Self::from_base)
            .ok_or_else(|| {
                let error = if rhs.base < B::ZERO {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                };
                Self::report("sub", self, rhs, error)
            })
    }

    /// Checked multiplication (truncating the dropped fraction bits).
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the product does not fit.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let negative = (self.base < B::ZERO) != (rhs.base < B::ZERO);
        let product = self
            .base
            .to_wide()
            .checked_mul(&rhs.base.to_wide())
            .map(|p| p.shr_or_sign(FRAC));

        let result = match product {
            Some(wide) => Self::narrow(wide),
            None if negative => Err(NumericError::Underflow),
            None => Err(NumericError::Overflow),
        };
        result.map_err(|error| Self::report("mul", self, rhs, error))
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor, `Overflow` or
    /// `Underflow` if the quotient does not fit.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.base == B::ZERO {
            return Err(Self::report("div", self, rhs, NumericError::DivisionByZero));
        }

        let dividend = self.base.to_wide().shl_or_zero(FRAC);
        let result = match dividend.checked_div(&rhs.base.to_wide()) {
            Some(wide) => Self::narrow(wide),
            None => Err(NumericError::Overflow),
        };
        result.map_err(|error| Self::report("div", self, rhs, error))
    }

    /// Checked remainder on the raw encoding.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.base == B::ZERO {
            return Err(Self::report("rem", self, rhs, NumericError::DivisionByZero));
        }
        Ok(Self::from_base(self.base.wrap_rem(rhs.base)))
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for the signed minimum, `Underflow` for any
    /// non-zero unsigned value.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        B::ZERO
            .checked_sub(&self.base)
            .map(Self::from_base)
            .ok_or_else(|| {
                let error = if B::SIGNED {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                };
                Self::report("neg", self, Self::ZERO, error)
            })
    }

    #[inline]
    fn narrow(wide: B::Wide) -> NumericResult<Self> {
        if wide > B::MAX.to_wide() {
            Err(NumericError::Overflow)
        } else if wide < B::MIN.to_wide() {
            Err(NumericError::Underflow)
        } else {
            Ok(Self::from_base(B::from_wide(wide)))
        }
    }

    #[cold]
    fn report(op: &'static str, lhs: Self, rhs: Self, error: NumericError) -> NumericError {
        tracing::trace!(op, ?lhs, ?rhs, %error, "checked fixed-point operation failed");
        error
    }
}

// ============================================================================
// Operators
// ============================================================================

macro_rules! impl_fixed_binop {
    ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<B: Base, const FRAC: u32> $Op for Fixed<B, FRAC> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                let ($lhs, $rhs) = (self, rhs.base);
                Self::from_base($body)
            }
        }

        impl<B: Base, const FRAC: u32, S: Scalar> $Op<S> for Fixed<B, FRAC> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: S) -> Self {
                <Self as $Op<Self>>::$op(self, Self::from_real(rhs))
            }
        }

        impl<B: Base, const FRAC: u32> $OpAssign for Fixed<B, FRAC> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = <Self as $Op<Self>>::$op(*self, rhs);
            }
        }

        impl<B: Base, const FRAC: u32, S: Scalar> $OpAssign<S> for Fixed<B, FRAC> {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                *self = <Self as $Op<S>>::$op(*self, rhs);
            }
        }
    };
}

impl_fixed_binop!(Add::add, AddAssign::add_assign, |lhs, rhs| lhs.base.wrap_add(rhs));
impl_fixed_binop!(Sub::sub, SubAssign::sub_assign, |lhs, rhs| lhs.base.wrap_sub(rhs));
impl_fixed_binop!(Mul::mul, MulAssign::mul_assign, |lhs, rhs| lhs.mul_base(rhs));
impl_fixed_binop!(Div::div, DivAssign::div_assign, |lhs, rhs| lhs.div_base(rhs));
impl_fixed_binop!(Rem::rem, RemAssign::rem_assign, |lhs, rhs| lhs.base.wrap_rem(rhs));

impl<B: Base, const FRAC: u32> Neg for Fixed<B, FRAC> {
    type Output = Self;

    /// Wrapping negation; unsigned storage wraps modulo `2^BITS`.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_base(self.base.wrap_neg())
    }
}

// ============================================================================
// Scalar Comparison and Conversion
// ============================================================================

impl<B: Base, const FRAC: u32, S: Scalar> PartialEq<S> for Fixed<B, FRAC> {
    #[inline]
    fn eq(&self, other: &S) -> bool {
        self.base == Self::from_real(*other).base
    }
}

impl<B: Base, const FRAC: u32, S: Scalar> PartialOrd<S> for Fixed<B, FRAC> {
    #[inline]
    fn partial_cmp(&self, other: &S) -> Option<Ordering> {
        Some(self.base.cmp(&Self::from_real(*other).base))
    }
}

impl<B: Base, const FRAC: u32, S: Scalar> From<S> for Fixed<B, FRAC> {
    #[inline]
    fn from(value: S) -> Self {
        Self::from_real(value)
    }
}

impl<B: Base, const FRAC: u32> From<Fixed<B, FRAC>> for f32 {
    #[inline]
    fn from(value: Fixed<B, FRAC>) -> Self {
        value.to()
    }
}

impl<B: Base, const FRAC: u32> From<Fixed<B, FRAC>> for f64 {
    #[inline]
    fn from(value: Fixed<B, FRAC>) -> Self {
        value.to()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<B: Base, const FRAC: u32> Classify for Fixed<B, FRAC> {
    const IS_FIXED_POINT: bool = true;
    const IS_INTEGRAL: bool = true;
}

impl<B: Base, const FRAC: u32> Widen for Fixed<B, FRAC> {
    type Wide = Fixed<B::Wide, FRAC>;
}

impl<B: Base, const FRAC: u32> FixedPointFamily for Fixed<B, FRAC> {
    type Storage = B;

    const FAMILY: Family = Family::Fixed;
    const OFFSET: u32 = FRAC;

    fn from_family<F: FixedPointFamily>(other: F) -> Self {
        let raw = other.base_value().as_i128();
        if same_instantiation::<F, Self>() {
            return Self::from_base(B::wrap_i128(raw));
        }

        match F::FAMILY {
            Family::Fixed => Self::from_base(B::wrap_i128(rescale_raw(raw, F::OFFSET, FRAC))),
            Family::Normalized => Self::from_real(other.to_f64()),
        }
    }

    #[inline]
    fn base_value(self) -> B {
        self.base
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self.to()
    }
}

impl<B: Base, const FRAC: u32> num_traits::Zero for Fixed<B, FRAC> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.base == B::ZERO
    }
}

impl<B: Base, const FRAC: u32> num_traits::One for Fixed<B, FRAC> {
    /// `1.0`, which wraps to zero when `FRAC` equals the storage width.
    #[inline]
    fn one() -> Self {
        Self::from_base(B::ONE.shl_or_zero(FRAC))
    }
}

impl<B: Base, const FRAC: u32> fmt::Debug for Fixed<B, FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fixed<{}, {}>({:?}, base={:?})",
            std::any::type_name::<B>(),
            FRAC,
            self.to_real(),
            self.base
        )
    }
}

// ============================================================================
// Raw Base Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl<B: Base + serde::Serialize, const FRAC: u32> serde::Serialize for Fixed<B, FRAC> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.base.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: Base + serde::Deserialize<'de>, const FRAC: u32> serde::Deserialize<'de>
    for Fixed<B, FRAC>
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        B::deserialize(deserializer).map(Self::from_base)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Signed 8-bit storage, 4 fractional bits
pub type Fixed8 = Fixed<i8, 4>;

/// Signed 16-bit storage, 8 fractional bits
pub type Fixed16 = Fixed<i16, 8>;

/// Signed 32-bit storage, 16 fractional bits
pub type Fixed32 = Fixed<i32, 16>;

/// Signed 64-bit storage, 32 fractional bits
pub type Fixed64 = Fixed<i64, 32>;

/// Unsigned 8-bit storage, 4 fractional bits
pub type UFixed8 = Fixed<u8, 4>;

/// Unsigned 16-bit storage, 8 fractional bits
pub type UFixed16 = Fixed<u16, 8>;

/// Unsigned 32-bit storage, 16 fractional bits
pub type UFixed32 = Fixed<u32, 16>;

/// Unsigned 64-bit storage, 32 fractional bits
pub type UFixed64 = Fixed<u64, 32>;

// ============================================================================
// Tests
// ============================================================================
