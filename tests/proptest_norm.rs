// ============================================================================
// Normalized Property Tests
// ============================================================================

use fixnorm::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Add(i16),
    Sub(i16),
    Mul(i16),
    Div(i16),
    Rem(i16),
    AddScalar(f32),
    SubScalar(f32),
    MulScalar(f32),
    DivScalar(f32),
    Assign(f32),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<i16>().prop_map(Step::Add),
        any::<i16>().prop_map(Step::Sub),
        any::<i16>().prop_map(Step::Mul),
        any::<i16>().prop_map(Step::Div),
        any::<i16>().prop_map(Step::Rem),
        (-8.0f32..8.0).prop_map(Step::AddScalar),
        (-8.0f32..8.0).prop_map(Step::SubScalar),
        (-1.0e6f32..1.0e6).prop_map(Step::MulScalar),
        (-8.0f32..8.0).prop_map(Step::DivScalar),
        any::<f32>().prop_map(Step::Assign),
    ]
}

fn apply<B: Base>(value: Norm<B>, step: Step, operand: impl Fn(i16) -> Norm<B>) -> Norm<B> {
    match step {
        Step::Add(raw) => value + operand(raw),
        Step::Sub(raw) => value - operand(raw),
        Step::Mul(raw) => value * operand(raw),
        Step::Div(raw) => {
            let divisor = operand(raw);
            if divisor.to_base() == B::ZERO {
                value
            } else {
                value / divisor
            }
        },
        Step::Rem(raw) => {
            let divisor = operand(raw);
            if divisor.to_base() == B::ZERO {
                value
            } else {
                value % divisor
            }
        },
        Step::AddScalar(s) => value + s,
        Step::SubScalar(s) => value - s,
        Step::MulScalar(s) => value * s,
        // Smaller divisors scale to a zero base on 16-bit storage
        Step::DivScalar(s) if s.abs() < 1.0e-3 => value,
        Step::DivScalar(s) => value / s,
        Step::Assign(s) => Norm::from_real(s),
    }
}

proptest! {
    #[test]
    fn signed_saturation_closure(
        start in any::<f32>(),
        steps in prop::collection::vec(step(), 1..32),
    ) {
        let mut x = Norm16::from_real(start);
        for step in steps {
            x = apply(x, step, Norm16::from_base);
            prop_assert!(x.to_base() >= Norm16::MIN_BASE, "{:?} after {:?}", x, step);
            prop_assert!(x.to_base() <= Norm16::MAX_BASE, "{:?} after {:?}", x, step);
        }
    }

    #[test]
    fn unsigned_saturation_closure(
        start in any::<f32>(),
        steps in prop::collection::vec(step(), 1..32),
    ) {
        let mut x = UNorm16::from_real(start);
        for step in steps {
            x = apply(x, step, |raw| UNorm16::from_base(raw as u16));
            prop_assert!(x.to_real() >= 0.0 && x.to_real() <= 1.0, "{:?} after {:?}", x, step);
        }
    }

    #[test]
    fn unsigned_scalar_add_sub_track_reals(raw in any::<u16>(), s in -2.0f32..2.0) {
        let x = UNorm16::from_base(raw);
        let tolerance = UNorm16::epsilon();

        let sum = (x.to_real() + s).clamp(0.0, 1.0);
        prop_assert!(((x + s).to_real() - sum).abs() <= tolerance, "{:?} + {}", x, s);

        let difference = (x.to_real() - s).clamp(0.0, 1.0);
        prop_assert!(((x - s).to_real() - difference).abs() <= tolerance, "{:?} - {}", x, s);
    }

    #[test]
    fn unsigned_by_negative_scalar_floors_at_zero(raw in any::<u16>(), s in -8.0f32..-1.0e-3) {
        let x = UNorm16::from_base(raw);
        prop_assert_eq!(x * s, UNorm16::ZERO);
        prop_assert_eq!(x / s, UNorm16::ZERO);
    }

    #[test]
    fn signed_scalar_mul_tracks_reals(raw in any::<i16>(), s in -2.0f32..2.0) {
        let x = Norm16::from_base(raw);
        let product = (x.to_real() * s).clamp(-1.0, 1.0);
        prop_assert!(((x * s).to_real() - product).abs() <= 2.0 * Norm16::epsilon());
    }

    #[test]
    fn wide_storage_saturation_closure(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (Norm64::from_base(a), Norm64::from_base(b));
        for result in [x + y, x - y, x * y] {
            prop_assert!(result.to_base() >= Norm64::MIN_BASE);
        }
        if y.to_base() != 0 {
            prop_assert!((x / y).to_base() >= Norm64::MIN_BASE);
        }
    }

    #[test]
    fn construction_is_clamped_and_monotonic(a in -4.0f64..4.0, b in -4.0f64..4.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (x, y) = (Norm32::from_real(lo), Norm32::from_real(hi));
        prop_assert!(x <= y);
        prop_assert!(x.to_real() >= -1.0 && y.to_real() <= 1.0);
    }

    #[test]
    fn round_trip_within_half_epsilon(v in -1.0f64..=1.0) {
        let x = Norm32::from_real(v);
        prop_assert!((x.to_real() - v).abs() <= Norm32::epsilon() / 2.0 + 1e-12);
    }

    #[test]
    fn signed_negation_is_symmetric(raw in any::<i16>()) {
        let x = Norm16::from_base(raw);
        prop_assert_eq!((-x).to_base(), -x.to_base());
        prop_assert_eq!(-(-x), x);
    }

    #[test]
    fn same_type_round_trip_is_exact(raw in any::<u32>()) {
        let x = UNorm32::from_base(raw);
        prop_assert_eq!(x.convert::<UNorm32>().to_base(), raw);
    }

    #[test]
    fn comparison_matches_base_order(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (Norm32::from_base(a), Norm32::from_base(b));
        prop_assert_eq!(x.cmp(&y), x.to_base().cmp(&y.to_base()));
        let held = [x < y, x == y, x > y].iter().filter(|&&h| h).count();
        prop_assert_eq!(held, 1);
    }
}
