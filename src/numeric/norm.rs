// ============================================================================
// Normalized Fixed-Point Number
// Full integer range mapped onto [-1, 1] (signed) or [0, 1] (unsigned),
// saturating on every operation
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::family::{same_instantiation, Family, FixedPointFamily};
use crate::interfaces::{Base, Classify, Real, Scalar, Widen};
use num_traits::Float as _;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Normalized fixed-point number (snorm/unorm).
///
/// Represents `base / MAX_BASE`, so the storage maximum is exactly `1.0`.
/// Signed storage gives up its most negative value to keep the range
/// symmetric: `Norm<i8>` spans bases `-127..=127`, i.e. `[-1.0, 1.0]`.
/// Unsigned storage spans `[0.0, 1.0]`.
///
/// # Saturation
/// The base is always inside `[MIN_BASE, MAX_BASE]`. Construction from a
/// scalar, `+`, `-`, `*`, `/` and `%` compute in the wide type with
/// saturating arithmetic and clamp before storing. Division or remainder by
/// a zero base panics.
///
/// Scalar operands of `+`, `-`, `*`, `/` are scaled into the wide encoding
/// without clamping first, so `Norm8::from_real(0.5) * 2.0` is `1.0` and
/// `UNorm8::from_real(0.75) + -0.5` is `0.25`.
///
/// # Negation
/// Signed storage negates exactly. Unsigned storage has no negative encoding,
/// so `-x` yields the negated real value in the float type instead.
///
/// # Example
/// ```
/// use fixnorm::numeric::{Norm8, UNorm8};
///
/// let a = Norm8::from_base(100);
/// assert_eq!((a + a).to_base(), 127);
///
/// let half = UNorm8::from_real(0.5f32);
/// let negated: f32 = -half;
/// assert!(negated < 0.0);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Norm<B: Base> {
    base: B,
}

impl<B: Base> Norm<B> {
    /// Scale bits: storage width minus the sign bit
    pub const OFFSET: u32 = B::NORM_OFFSET;

    /// Largest raw base, encoding `1.0`
    pub const MAX_BASE: B = B::MAX;

    /// Smallest raw base, encoding `-1.0` (signed) or `0.0` (unsigned)
    pub const MIN_BASE: B = B::NORM_MIN;

    /// Zero value
    pub const ZERO: Self = Self { base: B::ZERO };

    /// One (1.0)
    pub const ONE: Self = Self { base: B::MAX };

    /// Maximum representable value (1.0)
    pub const MAX: Self = Self { base: B::MAX };

    /// Minimum representable value (-1.0 or 0.0)
    pub const MIN: Self = Self { base: B::NORM_MIN };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw base, clamping it into `[MIN_BASE, MAX_BASE]`.
    #[inline]
    pub fn from_base(base: B) -> Self {
        Self {
            base: Ord::max(base, Self::MIN_BASE),
        }
    }

    /// Create from any integer or float value, rounding half away from zero
    /// and clamping to the representable range.
    #[inline]
    pub fn from_real<S: Scalar>(value: S) -> Self {
        Self::clamp(Self::encode(value).signed())
    }

    /// Replace the value with a scalar, using the
    /// [`from_real`](Self::from_real) rules.
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

    /// Get the value in the float type (`base / MAX_BASE`).
    #[inline]
    pub fn to_real(self) -> B::Float {
        self.base.to_float() / B::MAX.to_float()
    }

    /// Convert to any integer or float scalar (`as` semantics).
    #[inline]
    pub fn to<S: Scalar>(self) -> S {
        self.to_real().cast()
    }

    /// Convert into another fixed-point family member. Same instantiation
    /// copies the base; anything else goes through the real value.
    #[inline]
    pub fn convert<T: FixedPointFamily>(self) -> T {
        T::from_family(self)
    }

    /// The scale factor `2^OFFSET - 1` (the storage maximum) in the wide type.
    #[inline]
    pub fn correction() -> B::Wide {
        B::MAX.to_wide()
    }

    /// The real value of one base step.
    #[inline]
    pub fn epsilon() -> B::Float {
        B::MAX.to_float().recip()
    }

    /// Largest representable real value, exactly `1.0`.
    #[inline]
    pub fn max_value() -> B::Float {
        Self::MAX.to_real()
    }

    /// Smallest representable real value, exactly `-1.0` or `0.0`.
    #[inline]
    pub fn min_value() -> B::Float {
        Self::MIN.to_real()
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.base == B::ZERO {
            return Err(Self::report("div", self, rhs, NumericError::DivisionByZero));
        }
        Ok(self / rhs)
    }

    /// Checked remainder.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.base == B::ZERO {
            return Err(Self::report("rem", self, rhs, NumericError::DivisionByZero));
        }
        Ok(self % rhs)
    }

    // ========================================================================
    // Wide Arithmetic
    // ========================================================================

    /// Scales a scalar into the wide encoding without clamping.
    #[inline]
    fn encode<S: Scalar>(value: S) -> Scaled<B> {
        let value = <B::Float as Real>::of(value);
        let scaled = value.abs() * B::MAX.to_float() + <B::Float as Real>::HALF;
        Scaled {
            negative: value < <B::Float as num_traits::Zero>::zero(),
            magnitude: B::float_to_wide(scaled),
        }
    }

    #[inline]
    fn clamp(wide: B::Wide) -> Self {
        let wide = Ord::clamp(wide, Self::MIN_BASE.to_wide(), Self::MAX_BASE.to_wide());
        Self {
            base: B::from_wide(wide),
        }
    }

    #[inline]
    fn lift(self) -> B::Wide {
        self.base.to_wide()
    }

    #[inline]
    fn add_wide(self, rhs: B::Wide) -> Self {
        Self::clamp(self.lift().sat_add(rhs))
    }

    #[inline]
    fn sub_wide(self, rhs: B::Wide) -> Self {
        Self::clamp(self.lift().sat_sub(rhs))
    }

    #[inline]
    fn mul_wide(self, rhs: B::Wide) -> Self {
        Self::clamp(self.lift().sat_mul(rhs).shr_or_sign(Self::OFFSET))
    }

    #[inline]
    fn div_wide(self, rhs: B::Wide) -> Self {
        Self::clamp(self.lift().shl_or_zero(Self::OFFSET).wrap_div(rhs))
    }

    #[inline]
    fn add_scaled(self, rhs: Scaled<B>) -> Self {
        if rhs.negative {
            self.sub_wide(rhs.magnitude)
        } else {
            self.add_wide(rhs.magnitude)
        }
    }

    #[inline]
    fn sub_scaled(self, rhs: Scaled<B>) -> Self {
        if rhs.negative {
            self.add_wide(rhs.magnitude)
        } else {
            self.sub_wide(rhs.magnitude)
        }
    }

    /// A negative factor on unsigned storage gives a non-positive product,
    /// which `signed()` already floors at zero.
    #[inline]
    fn mul_scaled(self, rhs: Scaled<B>) -> Self {
        self.mul_wide(rhs.signed())
    }

    #[inline]
    fn div_scaled(self, rhs: Scaled<B>) -> Self {
        if rhs.negative && !B::SIGNED {
            // Non-positive quotient clamps to zero; a zero divisor still faults
            return Self::clamp(<B::Wide as Base>::ZERO.wrap_div(rhs.magnitude));
        }
        self.div_wide(rhs.signed())
    }

    #[inline]
    fn rem_base(self, rhs: B) -> Self {
        Self::clamp(self.base.wrap_rem(rhs).to_wide())
    }

    #[cold]
    fn report(op: &'static str, lhs: Self, rhs: Self, error: NumericError) -> NumericError {
        tracing::trace!(op, ?lhs, ?rhs, %error, "checked normalized operation failed");
        error
    }
}

/// Scalar operand in the wide encoding, split into sign and magnitude so
/// unsigned storage still sees negative operands.
#[derive(Clone, Copy)]
struct Scaled<B: Base> {
    negative: bool,
    magnitude: B::Wide,
}

impl<B: Base> Scaled<B> {
    /// The wide value itself; on unsigned storage negatives floor at zero.
    #[inline]
    fn signed(self) -> B::Wide {
        match (self.negative, B::SIGNED) {
            (false, _) => self.magnitude,
            (true, true) => self.magnitude.wrap_neg(),
            (true, false) => <B::Wide as Base>::ZERO,
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

macro_rules! impl_norm_binop {
    (
        $Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident,
        same: |$a:ident, $b:ident| $same:expr,
        scalar: |$c:ident, $d:ident| $scalar:expr $(,)?
    ) => {
        impl<B: Base> $Op for Norm<B> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                let ($a, $b) = (self, rhs);
                $same
            }
        }

        impl<B: Base, S: Scalar> $Op<S> for Norm<B> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: S) -> Self {
                let ($c, $d) = (self, rhs);
                $scalar
            }
        }

        impl<B: Base> $OpAssign for Norm<B> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = <Self as $Op<Self>>::$op(*self, rhs);
            }
        }

        impl<B: Base, S: Scalar> $OpAssign<S> for Norm<B> {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                *self = <Self as $Op<S>>::$op(*self, rhs);
            }
        }
    };
}

impl_norm_binop!(
    Add::add, AddAssign::add_assign,
    same: |lhs, rhs| lhs.add_wide(rhs.lift()),
    scalar: |lhs, rhs| lhs.add_scaled(Self::encode(rhs)),
);
impl_norm_binop!(
    Sub::sub, SubAssign::sub_assign,
    same: |lhs, rhs| lhs.sub_wide(rhs.lift()),
    scalar: |lhs, rhs| lhs.sub_scaled(Self::encode(rhs)),
);
impl_norm_binop!(
    Mul::mul, MulAssign::mul_assign,
    same: |lhs, rhs| lhs.mul_wide(rhs.lift()),
    scalar: |lhs, rhs| lhs.mul_scaled(Self::encode(rhs)),
);
impl_norm_binop!(
    Div::div, DivAssign::div_assign,
    same: |lhs, rhs| lhs.div_wide(rhs.lift()),
    scalar: |lhs, rhs| lhs.div_scaled(Self::encode(rhs)),
);
impl_norm_binop!(
    Rem::rem, RemAssign::rem_assign,
    same: |lhs, rhs| lhs.rem_base(rhs.base),
    scalar: |lhs, rhs| lhs.rem_base(Self::from_real(rhs).base),
);

macro_rules! impl_norm_neg {
    (signed: $($s:ty),*; unsigned: $($u:ty),*) => {
        $(
            impl Neg for Norm<$s> {
                type Output = Self;

                #[inline]
                fn neg(self) -> Self::Output {
                    Self {
                        base: self.base.wrapping_neg(),
                    }
                }
            }
        )*
        $(
            impl Neg for Norm<$u> {
                type Output = <$u as Base>::Float;

                #[inline]
                fn neg(self) -> Self::Output {
                    -self.to_real()
                }
            }
        )*
    };
}

impl_norm_neg!(signed: i8, i16, i32, i64, i128; unsigned: u8, u16, u32, u64, u128);

// ============================================================================
// Scalar Comparison and Conversion
// ============================================================================

impl<B: Base, S: Scalar> PartialEq<S> for Norm<B> {
    #[inline]
    fn eq(&self, other: &S) -> bool {
        self.base == Self::from_real(*other).base
    }
}

impl<B: Base, S: Scalar> PartialOrd<S> for Norm<B> {
    #[inline]
    fn partial_cmp(&self, other: &S) -> Option<Ordering> {
        Some(self.base.cmp(&Self::from_real(*other).base))
    }
}

impl<B: Base, S: Scalar> From<S> for Norm<B> {
    #[inline]
    fn from(value: S) -> Self {
        Self::from_real(value)
    }
}

impl<B: Base> From<Norm<B>> for f32 {
    #[inline]
    fn from(value: Norm<B>) -> Self {
        value.to()
    }
}

impl<B: Base> From<Norm<B>> for f64 {
    #[inline]
    fn from(value: Norm<B>) -> Self {
        value.to()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<B: Base> Classify for Norm<B> {
    const IS_FIXED_POINT: bool = true;
    const IS_INTEGRAL: bool = true;
}

impl<B: Base> Widen for Norm<B> {
    type Wide = Norm<B::Wide>;
}

impl<B: Base> FixedPointFamily for Norm<B> {
    type Storage = B;

    const FAMILY: Family = Family::Normalized;
    const OFFSET: u32 = B::NORM_OFFSET;

    fn from_family<F: FixedPointFamily>(other: F) -> Self {
        if same_instantiation::<F, Self>() {
            return Self::from_base(B::wrap_i128(other.base_value().as_i128()));
        }
        Self::from_real(other.to_f64())
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

impl<B: Base> num_traits::Zero for Norm<B> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.base == B::ZERO
    }
}

impl<B: Base> num_traits::One for Norm<B> {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl<B: Base> fmt::Debug for Norm<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Norm<{}>({:?}, base={:?})",
            std::any::type_name::<B>(),
            self.to_real(),
            self.base
        )
    }
}

// ============================================================================
// Raw Base Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl<B: Base + serde::Serialize> serde::Serialize for Norm<B> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.base.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, B: Base + serde::Deserialize<'de>> serde::Deserialize<'de> for Norm<B> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = B::deserialize(deserializer)?;
        let value = Self::from_base(raw);
        if value.base != raw {
            tracing::debug!(?raw, clamped = ?value.base, "normalized base clamped into range");
        }
        Ok(value)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Signed 8-bit normalized value in [-1, 1]
pub type Norm8 = Norm<i8>;

/// Signed 16-bit normalized value in [-1, 1]
pub type Norm16 = Norm<i16>;

/// Signed 32-bit normalized value in [-1, 1]
pub type Norm32 = Norm<i32>;

/// Signed 64-bit normalized value in [-1, 1]
pub type Norm64 = Norm<i64>;

/// Unsigned 8-bit normalized value in [0, 1]
pub type UNorm8 = Norm<u8>;

/// Unsigned 16-bit normalized value in [0, 1]
pub type UNorm16 = Norm<u16>;

/// Unsigned 32-bit normalized value in [0, 1]
pub type UNorm32 = Norm<u32>;

/// Unsigned 64-bit normalized value in [0, 1]
pub type UNorm64 = Norm<u64>;

// ============================================================================
// Tests
// ============================================================================
