// ============================================================================
// Fixed-Point Numerics Library
// Generic binary and normalized fixed-point value types over native integers
// ============================================================================

//! # fixnorm
//!
//! Value types for binary fixed-point and normalized fixed-point arithmetic,
//! generic over the native integer types.
//!
//! ## Features
//!
//! - **`Fixed<B, FRAC>`**: `base / 2^FRAC` with wrapping arithmetic
//! - **`Norm<B>`**: `base / MAX_BASE` in `[-1, 1]` or `[0, 1]`, saturating
//! - **Double-width intermediates** for multiply and divide
//! - **Mixed scalar operands** for every operator and comparison
//! - **Cross-instantiation conversion** through [`FixedPointFamily`](numeric::FixedPointFamily)
//! - **Classification traits** ([`is_fixed_point`](interfaces::is_fixed_point),
//!   [`is_integral`](interfaces::is_integral)) and a wide-type resolver
//!   ([`WideType`](interfaces::WideType))
//!
//! ## Example
//!
//! ```rust
//! use fixnorm::prelude::*;
//!
//! let a = Fixed16::from_real(1.5f32);
//! assert_eq!(a.base, 384);
//! assert_eq!((a * a).to_real(), 2.25);
//!
//! // Scalars mix with fixed-point operands
//! assert_eq!(a + 1i32, 2.5f32);
//!
//! // Normalized values clamp instead of wrapping
//! let n = Norm8::from_base(100);
//! assert_eq!((n + n).to_base(), 127);
//! assert_eq!(Norm8::max_value(), 1.0);
//!
//! // Conversions between instantiations
//! let wide: Fixed32 = a.convert();
//! assert_eq!(wide.to_real(), 1.5);
//! ```

pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::{
        is_fixed_point, is_integral, Base, Classify, Real, Scalar, WideType, Widen,
    };
    pub use crate::numeric::{
        Family, Fixed, Fixed16, Fixed32, Fixed64, Fixed8, FixedPointFamily, Norm, Norm16, Norm32,
        Norm64, Norm8, NumericError, NumericResult, UFixed16, UFixed32, UFixed64, UFixed8,
        UNorm16, UNorm32, UNorm64, UNorm8,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_mixed_families() {
        // Accumulate a fixed-point sum, then map it into a normalized gain
        let mut total = Fixed32::ZERO;
        for step in [0.25f32, 0.5, 0.125] {
            total += step;
        }
        assert_eq!(total.to_real(), 0.875);

        let gain: Norm16 = total.convert();
        assert!((gain.to_real() - 0.875).abs() <= Norm16::epsilon());

        // Scaling past one saturates
        let boosted = gain * 4i32;
        assert_eq!(boosted, Norm16::MAX);

        // Back into fixed-point through the real value
        let back: Fixed16 = boosted.convert();
        assert_eq!(back.to_real(), 1.0);
    }

    #[test]
    fn test_classification_across_crate() {
        assert!(is_fixed_point::<Fixed8>());
        assert!(is_fixed_point::<UNorm32>());
        assert!(!is_fixed_point::<f32>());
        assert!(is_integral::<Fixed64>());
        assert!(is_integral::<u16>());
        assert!(!is_integral::<f64>());
    }

    #[test]
    fn test_checked_failures_are_errors() {
        assert_eq!(
            Fixed8::MAX.checked_add(Fixed8::EPSILON),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Norm32::MAX.checked_div(Norm32::ZERO),
            Err(NumericError::DivisionByZero)
        );
    }
}
