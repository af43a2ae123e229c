// ============================================================================
// Wide-Type Resolver
// Maps a storage type to a type with at least double its range
// ============================================================================

use super::storage::Base;

/// Yields the promotion type used to multiply/divide without intermediate
/// overflow.
///
/// Integers follow the [`Base`] table; `f32` widens to `f64` and `f64` to
/// itself. The fixed-point families recurse into their storage type, so
/// `Fixed<i16, 8>` widens to `Fixed<i32, 8>` and `Norm<u8>` to `Norm<u16>`.
pub trait Widen {
    type Wide;
}

/// Shorthand for `<T as Widen>::Wide`.
pub type WideType<T> = <T as Widen>::Wide;

macro_rules! impl_widen {
    ($($t:ty),* $(,)?) => {$(
        impl Widen for $t {
            type Wide = <$t as Base>::Wide;
        }
    )*};
}

impl_widen!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl Widen for f32 {
    type Wide = f64;
}

impl Widen for f64 {
    type Wide = f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn test_integer_table() {
        assert!(same::<WideType<i8>, i16>());
        assert!(same::<WideType<i32>, i64>());
        assert!(same::<WideType<i64>, i128>());
        assert!(same::<WideType<u16>, u32>());
        assert!(same::<WideType<u64>, u128>());
    }

    #[test]
    fn test_widest_maps_to_itself() {
        assert!(same::<WideType<i128>, i128>());
        assert!(same::<WideType<u128>, u128>());
        assert!(same::<WideType<f64>, f64>());
    }

    #[test]
    fn test_float_widening() {
        assert!(same::<WideType<f32>, f64>());
    }
}
