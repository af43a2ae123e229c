// ============================================================================
// Fixed-Point Property Tests
// ============================================================================

use fixnorm::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip_within_half_epsilon(v in -30000.0f64..30000.0) {
        let x = Fixed32::from_real(v);
        let error = (x.to_real() - v).abs();
        prop_assert!(error <= Fixed32::epsilon() / 2.0 + 1e-12, "{v} -> {:?}", x);
    }

    #[test]
    fn round_trip_unsigned(v in 0.0f64..60000.0) {
        let x = UFixed32::from_real(v);
        prop_assert!((x.to_real() - v).abs() <= UFixed32::epsilon() / 2.0 + 1e-12);
    }

    #[test]
    fn same_type_round_trip_is_exact(raw in any::<i32>()) {
        let x = Fixed32::from_base(raw);
        prop_assert_eq!(x.convert::<Fixed32>().base, raw);
        prop_assert_eq!(Fixed32::from_base(x.to_base()), x);
    }

    #[test]
    fn add_mul_commute(a in any::<i16>(), b in any::<i16>()) {
        let (x, y) = (Fixed16::from_base(a), Fixed16::from_base(b));
        prop_assert_eq!(x + y, y + x);
        prop_assert_eq!(x * y, y * x);
    }

    #[test]
    fn add_sub_wrap_like_base(a in any::<i16>(), b in any::<i16>()) {
        let (x, y) = (Fixed16::from_base(a), Fixed16::from_base(b));
        prop_assert_eq!((x + y).base, a.wrapping_add(b));
        prop_assert_eq!((x - y).base, a.wrapping_sub(b));
        prop_assert_eq!((x + y - y), x);
    }

    #[test]
    fn mul_div_use_wide_intermediate(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (Fixed32::from_base(a), Fixed32::from_base(b));

        let product = ((a as i64 * b as i64) >> 16) as i32;
        prop_assert_eq!((x * y).base, product);

        if b != 0 {
            let quotient = ((a as i64) << 16).wrapping_div(b as i64) as i32;
            prop_assert_eq!((x / y).base, quotient);
        }
    }

    #[test]
    fn unsigned_mul_div_use_wide_intermediate(a in any::<u64>(), b in 1u64..) {
        let (x, y) = (UFixed64::from_base(a), UFixed64::from_base(b));
        prop_assert_eq!((x * y).base, ((a as u128 * b as u128) >> 32) as u64);
        prop_assert_eq!((x / y).base, (((a as u128) << 32) / b as u128) as u64);
    }

    #[test]
    fn widen_then_narrow_is_exact(raw in any::<i16>()) {
        let x = Fixed16::from_base(raw);
        let wide: Fixed32 = x.convert();
        prop_assert_eq!(wide.to_real(), x.to_real() as f64);
        prop_assert_eq!(wide.convert::<Fixed16>(), x);
    }

    #[test]
    fn comparison_matches_base_order(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (Fixed64::from_base(a), Fixed64::from_base(b));
        let held = [x < y, x == y, x > y].iter().filter(|&&h| h).count();
        prop_assert_eq!(held, 1);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }
}
