// ============================================================================
// Fixed-Point Family Conversion
// Re-scaling between differently parameterized fixed-point instances
// ============================================================================

use crate::interfaces::{Base, Classify};

/// The two fixed-point families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `base / 2^OFFSET`
    Fixed,
    /// `base / MAX_BASE`, saturating
    Normalized,
}

/// Common view over [`Fixed`](super::Fixed) and [`Norm`](super::Norm) used
/// to convert between instantiations.
///
/// Converting an instance into its own type is an exact copy of the base.
/// Fixed-to-fixed conversions re-scale the base with integer shifts (rounding
/// half away from zero when fractional bits are dropped); every other pair
/// goes through the real value.
pub trait FixedPointFamily: Copy + Classify {
    type Storage: Base;

    const FAMILY: Family;

    /// Fractional (fixed) or scale (normalized) bits.
    const OFFSET: u32;

    /// Builds `Self` from any family member.
    fn from_family<F: FixedPointFamily>(other: F) -> Self;

    /// The raw encoded base.
    fn base_value(self) -> Self::Storage;

    /// The represented real value as `f64`.
    fn to_f64(self) -> f64;
}

/// Whether `A` and `B` are the same instantiation (same family, storage and
/// offset).
#[inline]
pub fn same_instantiation<A: FixedPointFamily, B: FixedPointFamily>() -> bool {
    A::FAMILY == B::FAMILY
        && A::OFFSET == B::OFFSET
        && <A::Storage as Base>::BITS == <B::Storage as Base>::BITS
        && <A::Storage as Base>::SIGNED == <B::Storage as Base>::SIGNED
}

/// Moves a raw fixed-point encoding from `from` to `to` fractional bits.
///
/// Widening the fraction shifts left (bits pushed past 128 are lost);
/// narrowing rounds half away from zero.
pub(crate) fn rescale_raw(raw: i128, from: u32, to: u32) -> i128 {
    if to >= from {
        return raw.checked_shl(to - from).unwrap_or(0);
    }

    let shift = from - to;
    if shift >= i128::BITS {
        return 0;
    }

    let half = 1i128 << (shift - 1);
    if raw >= 0 {
        raw.saturating_add(half) >> shift
    } else {
        -(raw.saturating_neg().saturating_add(half) >> shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_widen() {
        assert_eq!(rescale_raw(24, 4, 8), 384);
        assert_eq!(rescale_raw(-24, 4, 8), -384);
        assert_eq!(rescale_raw(1, 0, 128), 0);
    }

    #[test]
    fn test_rescale_identity() {
        assert_eq!(rescale_raw(-77, 5, 5), -77);
    }

    #[test]
    fn test_rescale_narrow_rounds_half_away() {
        // 1.5 at 4 bits -> 2 at 0 bits, -1.5 -> -2
        assert_eq!(rescale_raw(24, 4, 0), 2);
        assert_eq!(rescale_raw(-24, 4, 0), -2);
        // 1.25 at 4 bits -> 1
        assert_eq!(rescale_raw(20, 4, 0), 1);
        assert_eq!(rescale_raw(-20, 4, 0), -1);
        assert_eq!(rescale_raw(i128::MAX, 128, 0), 0);
    }
}
